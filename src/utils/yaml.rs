use std::fs;

use serde::Deserialize;

use crate::component::Demand;
use crate::network::Topology;

#[derive(Deserialize)]
struct ScenarioYaml {
    topology: TopologyYaml,
    demands: Vec<DemandYaml>,
}

#[derive(Deserialize)]
struct TopologyYaml {
    #[serde(default)]
    nodes: Vec<String>,
    links: Vec<LinkYaml>,
}

#[derive(Deserialize)]
struct LinkYaml {
    ends: [String; 2],
    capacity: u64,
}

#[derive(Deserialize)]
struct DemandYaml {
    src: String,
    dst: String,
    rate: f64,
}

/// Loads a scenario file. Link capacities are kbps already; demand rates
/// are Mbps and converted here, so the engine only ever sees one unit.
pub fn load_scenario(path: &str) -> (Topology, Vec<Demand>) {
    let text = fs::read_to_string(path)
        .expect("Failed to read scenario yaml file");
    let yaml: ScenarioYaml = serde_yaml::from_str(&text)
        .expect("Failed to parse scenario yaml file");
    let mut topology = Topology::new();
    for node in &yaml.topology.nodes {
        topology.add_node(node);
    }
    for link in &yaml.topology.links {
        topology.add_link(&link.ends[0], &link.ends[1], link.capacity)
            .expect("Failed to insert link");
    }
    let demands = yaml.demands.iter()
        .map(|demand| Demand::new(&demand.src, &demand.dst, (demand.rate * 1000.0) as u64))
        .collect();
    (topology, demands)
}
