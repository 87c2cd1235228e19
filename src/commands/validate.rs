use crate::classifier::{Classification, Classifier};
use crate::errors::Result;
use crate::io::output::{create_writer, OutputFormat};
use rayon::prelude::*;
use std::collections::HashSet;
use std::io::Write;

/// One batch of strings to classify and how to report them
#[derive(Debug, Clone)]
pub struct ValidateRequest {
    pub strings: Vec<String>,
    pub format: OutputFormat,
    pub verbose: bool,
    pub parallel: bool,
}

/// Drop repeated strings, keeping the first occurrence of each in order
pub fn dedupe(strings: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(strings.len());
    strings
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Classify every string, preserving input order
pub fn classify_batch(
    classifier: &Classifier,
    strings: &[String],
    parallel: bool,
) -> Vec<Classification> {
    if parallel {
        strings
            .par_iter()
            .map(|s| classifier.classification(s))
            .collect()
    } else {
        strings
            .iter()
            .map(|s| classifier.classification(s))
            .collect()
    }
}

/// Deduplicate, classify and write the report to `out`
pub fn run<W: Write>(classifier: &Classifier, request: ValidateRequest, out: W) -> Result<()> {
    let strings = dedupe(request.strings);
    log::debug!(
        "Classifying {} unique strings ({})",
        strings.len(),
        if request.parallel { "parallel" } else { "sequential" }
    );

    let results = classify_batch(classifier, &strings, request.parallel);
    create_writer(request.format, out, request.verbose).write_results(&results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::FormatTag;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence_order() {
        let deduped = dedupe(strings(&["b", "a", "b", "c", "a"]));
        assert_eq!(deduped, strings(&["b", "a", "c"]));
    }

    #[test]
    fn test_dedupe_is_case_sensitive() {
        let deduped = dedupe(strings(&["Example.com", "example.com"]));
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let classifier = Classifier::new();
        let inputs = strings(&[
            "user@example.com",
            "192.168.1.1",
            "2001:db8::1",
            "+1 800 555 0199",
            "garbage",
            "https://example.com/path?x=1",
        ]);

        let sequential = classify_batch(&classifier, &inputs, false);
        let parallel = classify_batch(&Classifier::new(), &inputs, true);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential[1].types, vec![FormatTag::Ipv4]);
    }

    #[test]
    fn test_run_writes_report_once_per_unique_string() {
        let classifier = Classifier::new();
        let request = ValidateRequest {
            strings: strings(&["192.168.1.1", "192.168.1.1", "nope"]),
            format: OutputFormat::Text,
            verbose: true,
            parallel: false,
        };
        let mut out = Vec::new();
        run(&classifier, request, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "String: 192.168.1.1\n\tValid ipv4\nString: nope\n\tNo valid types\n"
        );
        assert_eq!(classifier.stats().classify.misses, 2);
    }
}
