#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankedEntry<V> {
    pub name: String,
    pub value: V,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchReport {
    pub number: usize,
    pub total_kills: usize,
    pub scores: Vec<RankedEntry<i64>>,
    pub causes_of_death: Vec<RankedEntry<usize>>,
}

/// Highest value first, ties ordered by name so the output is reproducible.
pub fn rank_by_value_desc<'m, V, I>(entries: I) -> Vec<RankedEntry<V>>
where
    V: Ord + Copy + 'm,
    I: IntoIterator<Item = (&'m String, &'m V)>,
{
    let mut ranked: Vec<_> = entries
        .into_iter()
        .map(|(name, value)| RankedEntry {
            name: name.clone(),
            value: *value,
        })
        .collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    ranked
}
