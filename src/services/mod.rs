pub mod build_index;
pub mod cache_gate;
pub mod evaluator;
pub mod expected_builds;
pub mod extractor;
pub mod html_table;
pub mod matcher;
pub mod query_url;
pub mod verifier;

pub use build_index::BuildIndex;
pub use cache_gate::CacheGate;
pub use evaluator::{all_pass, build_names, build_passes, canonical_string};
pub use expected_builds::{expected_builds_from_csv, parse_csv, read_csv_file, CsvRow};
pub use extractor::{decode_payload, extract, extract_all};
pub use html_table::{
    render_html_table, render_summary_table, rows_from, CellAlign, SummaryTableSpec, TableColumn,
    TableRow, TableStyle,
};
pub use matcher::{all_expected_exist, find_missing, format_name_list};
pub use query_url::{
    index_browser_url, index_query_url, query_tests_browser_url, query_tests_query_url, QueryUrls,
};
pub use verifier::{
    download_builds_and_summarize, query_and_determine_pass_fail, verify, verify_summaries,
};
