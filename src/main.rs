use netcap::sim::Simulator;
use netcap::utils::config::Arguments;
use netcap::utils::yaml;
use tracing::warn;

fn main() {
    tracing_subscriber::fmt::init();
    let args: Arguments = argh::from_env();
    if args.fail.is_some() && args.failed_link().is_none() {
        panic!("Failed to parse --fail, expected two node ids as \"U:V\"");
    }

    let (topology, demands) = yaml::load_scenario(&args.scenario);
    for link in topology.zero_capacity_links() {
        warn!("link {} has zero capacity, it will read as overloaded", link);
    }

    let mut simulator = Simulator::new(topology, demands);
    simulator.max_alternates = args.max_alternates;

    let report = simulator.run()
        .expect("Failed to run capacity check");
    print!("{}", report.render());

    if let Some((end0, end1)) = args.failed_link() {
        let fault = simulator.run_with_fault(end0, end1)
            .expect("Failed to simulate link failure");
        print!("{}", fault.render());
    }
}
