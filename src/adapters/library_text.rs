use crate::domain::model::GeneSetLibrary;

/// Parses the tab separated text format shared by Enrichr downloads and GMT
/// files: `pathway<TAB>description<TAB>gene<TAB>gene...`.
///
/// Empty fields are skipped and weighted entries (`SYMBOL,0.8`) keep only the
/// symbol. A line with a name but no tab becomes a pathway without genes, and a
/// pathway listed twice keeps the genes of its last line.
pub fn parse_library(name: &str, text: &str) -> GeneSetLibrary {
    let mut library = GeneSetLibrary::new(name);

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let pathway = fields.next().unwrap_or("").trim();
        if pathway.is_empty() {
            tracing::debug!("Skipping unnamed gene set on line {}", line_no + 1);
            continue;
        }
        if fields.next().is_none() {
            tracing::warn!(
                "Gene set '{}' on line {} of {} has no gene columns",
                pathway,
                line_no + 1,
                name
            );
        }

        let genes: Vec<String> = fields
            .filter_map(|field| field.split(',').next())
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();

        if library.pathways.insert(pathway.to_string(), genes).is_some() {
            tracing::debug!("Gene set '{}' redefined on line {}", pathway, line_no + 1);
        }
    }

    library
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enrichr_text() {
        let text = "Glycolysis / Gluconeogenesis\t\tHK1\tHK2\tGCK\t\n\
                    p53 signaling pathway\tdesc\tTP53,1.0\tMDM2,0.5\n\
                    \n";
        let lib = parse_library("KEGG_2021_Human", text);

        assert_eq!(lib.name, "KEGG_2021_Human");
        assert_eq!(lib.len(), 2);
        assert_eq!(
            lib.pathways["Glycolysis / Gluconeogenesis"],
            vec!["HK1", "HK2", "GCK"]
        );
        assert_eq!(lib.pathways["p53 signaling pathway"], vec!["TP53", "MDM2"]);
    }

    #[test]
    fn test_windows_line_endings_and_unnamed_lines() {
        let text = "A\t\tX\tY\r\n\t\tZ\r\n";
        let lib = parse_library("lib", text);
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.pathways["A"], vec!["X", "Y"]);
    }

    #[test]
    fn test_line_without_tabs_keeps_neighbours() {
        let lib = parse_library("lib", "A\t\tX\tY\nB_no_genes\nC\t\tZ\n");
        assert_eq!(lib.len(), 3);
        assert_eq!(lib.pathways["A"], vec!["X", "Y"]);
        assert!(lib.pathways["B_no_genes"].is_empty());
        assert_eq!(lib.pathways["C"], vec!["Z"]);
    }

    #[test]
    fn test_repeated_pathway_keeps_last_line() {
        let lib = parse_library("lib", "A\t\tX\nA\t\tY\tZ\n");
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.pathways["A"], vec!["Y", "Z"]);
    }
}
