use crate::domain::model::{FilterOptions, FilteredPathways, GeneSetLibrary};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};

fn normalize(symbol: &str, case_insensitive: bool) -> Cow<'_, str> {
    if case_insensitive {
        Cow::Owned(symbol.trim().to_uppercase())
    } else {
        Cow::Borrowed(symbol)
    }
}

/// The query as a set, normalised the same way pathway genes are compared.
pub fn query_set<S: AsRef<str>>(
    query_genes: &[S],
    case_insensitive: bool,
) -> HashSet<Cow<'_, str>> {
    query_genes
        .iter()
        .map(|g| normalize(g.as_ref(), case_insensitive))
        .collect()
}

/// Keeps every pathway sharing at least `min_genes_per_pathway` genes with the
/// query. The retained genes are the intersection, sorted and de-duplicated.
pub fn filter_pathways<S: AsRef<str>>(
    library: &GeneSetLibrary,
    query_genes: &[S],
    options: &FilterOptions,
) -> FilteredPathways {
    let query = query_set(query_genes, options.case_insensitive);

    let mut filtered = FilteredPathways::new();
    for (pathway, genes) in &library.pathways {
        let common: BTreeSet<String> = genes
            .iter()
            .map(|g| normalize(g, options.case_insensitive))
            .filter(|g| query.contains(&**g))
            .map(Cow::into_owned)
            .collect();

        if common.len() >= options.min_genes_per_pathway {
            tracing::trace!("{} kept with {} genes", pathway, common.len());
            filtered.insert(pathway.clone(), common.into_iter().collect());
        }
    }

    filtered
}
