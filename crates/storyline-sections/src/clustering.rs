//! Greedy seed clustering over concept bags.
//!
//! Seeds are concepts whose document frequency meets the adaptive
//! threshold, taken by frequency (descending), category labels before
//! plain words, then first appearance. Each seed claims every still
//! unassigned insight whose bag contains it.

use std::collections::HashMap;

use storyline_core::errors::ExtractionWarning;
use tracing::debug;

/// A cluster of insight indices and the concept that seeded it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub seed: String,
    /// Indices into the clustered slice, ascending.
    pub members: Vec<usize>,
}

/// Clusters plus whatever no cluster claimed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterResult {
    pub clusters: Vec<Cluster>,
    /// Ascending indices left for the fallback section.
    pub unassigned: Vec<usize>,
    pub warnings: Vec<ExtractionWarning>,
}

/// Seed concept with its ordering keys.
#[derive(Debug)]
struct Seed<'a> {
    concept: &'a str,
    df: usize,
    is_category: bool,
    first_seen: usize,
}

/// Cluster `bags` (one per insight). `categories` holds each insight's
/// category label, which ranks ahead of plain words on equal frequency.
///
/// At most `max_clusters` clusters are formed, leaving room for a fallback
/// section unless the last cluster claims everything left.
pub fn cluster_bags(
    bags: &[Vec<String>],
    categories: &[&str],
    threshold: usize,
    max_clusters: usize,
) -> ClusterResult {
    let mut assigned = vec![false; bags.len()];
    let mut result = ClusterResult::default();
    let mut cap_hit = false;

    for seed in seeds(bags, categories, threshold) {
        let remaining = assigned.iter().filter(|a| !**a).count();
        if remaining == 0 {
            break;
        }

        let members: Vec<usize> = bags
            .iter()
            .enumerate()
            .filter(|(i, bag)| !assigned[*i] && bag.iter().any(|c| c == seed.concept))
            .map(|(i, _)| i)
            .collect();

        if members.len() < threshold {
            // Earlier clusters took enough of this seed's insights to sink it.
            if !members.is_empty() {
                debug!(concept = seed.concept, df = seed.df, "seed cluster fell below threshold");
                result.warnings.push(ExtractionWarning::EmptyCluster {
                    concept: seed.concept.to_string(),
                });
            }
            continue;
        }

        // The last slot goes to a cluster only when it leaves nothing over.
        if result.clusters.len() + 1 >= max_clusters && members.len() < remaining {
            cap_hit = true;
            continue;
        }
        if result.clusters.len() >= max_clusters {
            cap_hit = true;
            break;
        }

        for &i in &members {
            assigned[i] = true;
        }
        result.clusters.push(Cluster {
            seed: seed.concept.to_string(),
            members,
        });
    }

    result.unassigned = (0..bags.len()).filter(|i| !assigned[*i]).collect();
    if cap_hit && !result.unassigned.is_empty() {
        result.warnings.push(ExtractionWarning::SectionCapReached {
            max_sections: max_clusters,
            remaining: result.unassigned.len(),
        });
    }
    result
}

fn seeds<'a>(bags: &'a [Vec<String>], categories: &[&str], threshold: usize) -> Vec<Seed<'a>> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut seeds: Vec<Seed<'a>> = Vec::new();

    let mut position = 0usize;
    for bag in bags {
        for concept in bag {
            match index.get(concept.as_str()) {
                Some(&i) => seeds[i].df += 1,
                None => {
                    index.insert(concept.as_str(), seeds.len());
                    seeds.push(Seed {
                        concept: concept.as_str(),
                        df: 1,
                        is_category: categories.contains(&concept.as_str()),
                        first_seen: position,
                    });
                }
            }
            position += 1;
        }
    }

    seeds.retain(|s| s.df >= threshold.max(1));
    seeds.sort_by(|a, b| {
        b.df.cmp(&a.df)
            .then(b.is_category.cmp(&a.is_category))
            .then(a.first_seen.cmp(&b.first_seen))
    });
    seeds
}
