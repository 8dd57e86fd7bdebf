use httpmock::prelude::*;
use pathway_filter::output::{write_report, OutputFormat};
use pathway_filter::{
    EnrichrClient, FilterOptions, GmtFileSource, LocalStorage, PathwayEngine,
};
use std::time::Duration;
use tempfile::TempDir;

const KEGG_TEXT: &str = "\
Glycolysis / Gluconeogenesis hsa00010\t\tHK1\tHK2\tHK3\tGCK\tGPI\tPFKL\tPFKM\tALDOA\tTPI1\tGAPDH\tPGK1\tENO1\tPKM\tLDHA\tLDHB\tPCK1\n\
Insulin signaling pathway hsa04910\t\tHK1\tHK2\tHK3\tGCK\tFOXO1\tPCK1\tINSR\tIRS1\n\
p53 signaling pathway hsa04115\t\tTP53\tMDM2\tCDKN1A\tBAX\n\
Pathways in cancer hsa05200\t\tEGFR\tTP53\tBRCA1\tKRAS\tMYC\n";

fn example_genes() -> Vec<String> {
    [
        "HK1", "HK2", "GCK", "HK3", "GPI", "PFKL", "PFKM", "PFKP", "ALDOA", "ALDOB", "ALDOC",
        "TPI1", "GAPDH", "PGK1", "PGK2", "PGAM1", "PGAM2", "ENO1", "ENO2", "ENO3", "PKLR", "PKM",
        "LDHA", "LDHB", "ACSS2", "FOXO1", "PCK1", "EGFR", "TP53", "BRCA1",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn enrichr(server: &MockServer) -> EnrichrClient {
    EnrichrClient::with_settings(server.base_url(), Duration::from_secs(5), 2, Duration::ZERO)
        .unwrap()
}

#[tokio::test]
async fn test_end_to_end_enrichr_fetch_and_filter() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/geneSetLibrary")
            .query_param("libraryName", "KEGG_2021_Human");
        then.status(200)
            .header("Content-Type", "text/plain")
            .body(KEGG_TEXT);
    });

    let engine = PathwayEngine::new(enrichr(&server));
    let options = FilterOptions {
        min_genes_per_pathway: 5,
        case_insensitive: false,
    };
    let report = engine
        .build_report(&example_genes(), "KEGG_2021_Human", &options)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(report.total_pathways, 4);
    assert_eq!(report.retained(), 2);

    let glycolysis = &report.pathways["Glycolysis / Gluconeogenesis hsa00010"];
    assert_eq!(glycolysis.len(), 16);
    let mut sorted = glycolysis.clone();
    sorted.sort();
    assert_eq!(glycolysis, &sorted);

    assert_eq!(
        report.pathways["Insulin signaling pathway hsa04910"],
        vec!["FOXO1", "GCK", "HK1", "HK2", "HK3", "PCK1"]
    );
    assert!(!report.pathways.contains_key("Pathways in cancer hsa05200"));

    let storage = LocalStorage::new(output_path.clone());
    let written = write_report(&storage, &report, &[OutputFormat::Json, OutputFormat::Tsv])
        .await
        .unwrap();
    assert_eq!(written.len(), 2);

    let json_path = temp_dir.path().join("KEGG_2021_Human_filtered.json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(json["library"], "KEGG_2021_Human");
    assert_eq!(json["min_genes_per_pathway"], 5);
    assert_eq!(
        json["pathways"]["Insulin signaling pathway hsa04910"][0],
        "FOXO1"
    );

    let tsv = std::fs::read_to_string(temp_dir.path().join("KEGG_2021_Human_filtered.tsv")).unwrap();
    assert_eq!(tsv.lines().count(), 3);
}

#[tokio::test]
async fn test_fetch_failure_returns_empty_result() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/geneSetLibrary");
        then.status(503);
    });

    let engine = PathwayEngine::new(enrichr(&server));
    let result = engine
        .get_filtered_pathways(&example_genes(), "KEGG_2021_Human", &FilterOptions::default())
        .await;

    assert!(result.is_empty());
    api_mock.assert_hits(2);
}

#[tokio::test]
async fn test_unknown_library_propagates_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geneSetLibrary");
        then.status(200).body("");
    });

    let engine = PathwayEngine::new(enrichr(&server));
    let err = engine
        .fetch_and_filter(&example_genes(), "KEGG_1999_Martian", &FilterOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("KEGG_1999_Martian"));
}

#[tokio::test]
async fn test_gmt_source_case_insensitive() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("KEGG_2021_Human.gmt"), KEGG_TEXT).unwrap();

    let engine = PathwayEngine::new(GmtFileSource::new(dir.path()));
    let query = ["tp53", "Mdm2", "bax", "egfr"];

    let strict = engine
        .fetch_and_filter(&query, "KEGG_2021_Human", &FilterOptions::default())
        .await
        .unwrap();
    assert!(strict.is_empty());

    let options = FilterOptions {
        min_genes_per_pathway: 3,
        case_insensitive: true,
    };
    let relaxed = engine
        .fetch_and_filter(&query, "KEGG_2021_Human", &options)
        .await
        .unwrap();
    assert_eq!(relaxed.len(), 1);
    assert_eq!(
        relaxed["p53 signaling pathway hsa04115"],
        vec!["BAX", "MDM2", "TP53"]
    );
}
