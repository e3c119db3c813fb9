//! Greedy chain-to-bundle assignment.
//!
//! A PDB file offers 5-digit atom serials and single-character chain ids,
//! so a large structure must be split across several files. Chains are
//! packed in encounter order: a chain opens a new bundle when adding it
//! (its atoms plus one TER record) would push the running serial count past
//! the limit, or when the 62-symbol chain alphabet of the current bundle is
//! exhausted. Order is never reshuffled to pack tighter, which keeps every
//! chain's atoms contiguous and the mapping table easy to follow.

use crate::core::models::bundle::{
    BundlePlan, CHAIN_ALPHABET, ChainBundle, ChainStats, MAX_SERIALS,
};

/// Assigns chains to bundles and picks each chain's output id.
///
/// Within a bundle the remapping is injective: ids are drawn from
/// [`CHAIN_ALPHABET`] in assignment order, except that a bundle whose
/// chains all carry single-character ids keeps those ids unchanged. A
/// single oversized chain still gets a bundle of its own rather than being
/// split.
pub fn plan_bundles(chains: &[ChainStats]) -> BundlePlan {
    let alphabet: Vec<char> = CHAIN_ALPHABET.chars().collect();
    let mut bundles: Vec<ChainBundle> = Vec::new();
    let mut current = ChainBundle::default();
    let mut serials = 0usize;

    for chain in chains {
        let cost = chain.atom_count + 1;
        let over_capacity =
            serials + cost > MAX_SERIALS || current.chains.len() >= alphabet.len();
        if over_capacity && !current.chains.is_empty() {
            bundles.push(std::mem::take(&mut current));
            serials = 0;
        }
        let symbol = alphabet[current.chains.len()];
        current.remap.insert(chain.id.clone(), symbol);
        current.chains.push(chain.id.clone());
        serials += cost;
    }
    if !current.chains.is_empty() {
        bundles.push(current);
    }

    for bundle in &mut bundles {
        let all_single = bundle.chains.iter().all(|c| c.chars().count() == 1);
        if all_single {
            for chain in &bundle.chains {
                if let Some(original) = chain.chars().next() {
                    bundle.remap.insert(chain.clone(), original);
                }
            }
        }
    }
    BundlePlan { bundles }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(id: &str, atoms: usize) -> ChainStats {
        ChainStats {
            id: id.to_string(),
            atom_count: atoms,
            hydrogen_count: 0,
        }
    }

    #[test]
    fn serial_budget_splits_large_structures_into_two_bundles() {
        let chains = vec![
            chain("AA", 40_000),
            chain("BA", 40_000),
            chain("CA", 30_000),
        ];
        let plan = plan_bundles(&chains);
        assert_eq!(plan.bundles.len(), 2);
        assert_eq!(plan.bundles[0].chains, vec!["AA", "BA"]);
        assert_eq!(plan.bundles[1].chains, vec!["CA"]);
    }

    #[test]
    fn chain_alphabet_exhaustion_opens_a_new_bundle() {
        let chains: Vec<ChainStats> = (0..63).map(|i| chain(&format!("C{i}"), 10)).collect();
        let plan = plan_bundles(&chains);
        assert_eq!(plan.bundles.len(), 2);
        assert_eq!(plan.bundles[0].chains.len(), 62);
        assert_eq!(plan.bundles[1].chains.len(), 1);
    }

    #[test]
    fn remapping_is_injective_within_each_bundle() {
        let chains: Vec<ChainStats> = (0..62).map(|i| chain(&format!("C{i}"), 10)).collect();
        let plan = plan_bundles(&chains);
        let mut seen: Vec<char> = plan.bundles[0]
            .chains
            .iter()
            .map(|c| plan.bundles[0].mapped_id(c))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn single_character_ids_survive_unchanged() {
        let chains = vec![chain("B", 10), chain("A", 10), chain("z", 10)];
        let plan = plan_bundles(&chains);
        assert_eq!(plan.bundles[0].mapped_id("B"), 'B');
        assert_eq!(plan.bundles[0].mapped_id("A"), 'A');
        assert_eq!(plan.bundles[0].mapped_id("z"), 'z');
    }

    #[test]
    fn one_multi_character_id_forces_remapping_of_the_whole_bundle() {
        let chains = vec![chain("B", 10), chain("AB", 10)];
        let plan = plan_bundles(&chains);
        assert_eq!(plan.bundles[0].mapped_id("B"), 'A');
        assert_eq!(plan.bundles[0].mapped_id("AB"), 'B');
    }

    #[test]
    fn oversized_chain_still_gets_its_own_bundle() {
        let chains = vec![chain("X", 150_000)];
        let plan = plan_bundles(&chains);
        assert_eq!(plan.bundles.len(), 1);
        assert_eq!(plan.bundles[0].chains, vec!["X"]);
    }

    #[test]
    fn no_chains_means_no_bundles() {
        assert!(plan_bundles(&[]).bundles.is_empty());
    }
}
