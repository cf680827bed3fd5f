use argh::FromArgs;

/// Capacity check and load-balancing advisor for small IP networks
#[derive(FromArgs)]
pub struct Arguments {
    /// path to scenario yaml (topology and traffic demands)
    #[argh(positional)]
    pub scenario: String,
    /// simulate failure of a link, given as two node ids "U:V"
    #[argh(option, short = 'f')]
    pub fail: Option<String>,
    /// alternate paths examined per congested demand
    #[argh(option, short = 'k', default = "crate::MAX_ALTERNATES")]
    pub max_alternates: usize,
}

impl Arguments {
    /// Splits the `--fail` option into its two endpoints.
    pub fn failed_link(&self) -> Option<(&str, &str)> {
        let fail = self.fail.as_ref()?;
        let mut ends = fail.splitn(2, ':');
        match (ends.next(), ends.next()) {
            (Some(end0), Some(end1)) => Some((end0, end1)),
            _ => None,
        }
    }
}
