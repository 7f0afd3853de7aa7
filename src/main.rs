use std::env;

use crate::signatures::{SignatureFile, ERROR_SIGNATURES};
use crate::utils::selector_computer::SelectorComputer;

mod signatures;
mod utils;

/// One report line per signature, in input order.
fn report_lines(computer: &SelectorComputer, signatures: &[String]) -> Vec<String> {
    signatures
        .iter()
        .map(|signature| format!("{}: {}", signature, computer.compute_selector(signature)))
        .collect()
}

fn main() -> anyhow::Result<()> {
    // A TOML file with a `signatures` list can be passed as the first
    // argument; otherwise the embedded contract errors are used.
    let signatures: Vec<String> = match env::args().nth(1) {
        Some(path) => SignatureFile::load(&path)?.signatures,
        None => ERROR_SIGNATURES.iter().map(|s| s.to_string()).collect(),
    };

    let computer = SelectorComputer::default();
    for line in report_lines(&computer, &signatures) {
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_preserves_order() {
        let computer = SelectorComputer::default();
        let signatures = vec![
            "CannotBeZero()".to_string(),
            "OnlyAdminCanCall()".to_string(),
            "AttestationTimeout()".to_string(),
        ];
        assert_eq!(
            report_lines(&computer, &signatures),
            vec![
                "CannotBeZero(): 0x1e1d0ab5",
                "OnlyAdminCanCall(): 0xa7f8eed6",
                "AttestationTimeout(): 0x4d59de39",
            ]
        );
    }

    #[test]
    fn test_duplicates_are_not_merged() {
        let computer = SelectorComputer::default();
        let signatures = vec!["InvalidMarket()".to_string(), "InvalidMarket()".to_string()];
        assert_eq!(
            report_lines(&computer, &signatures),
            vec!["InvalidMarket(): 0x9db8d5b1", "InvalidMarket(): 0x9db8d5b1"]
        );
    }

    #[test]
    fn test_embedded_report_spot_checks() {
        let computer = SelectorComputer::default();
        let signatures: Vec<String> = ERROR_SIGNATURES.iter().map(|s| s.to_string()).collect();
        let lines = report_lines(&computer, &signatures);
        assert_eq!(lines.len(), ERROR_SIGNATURES.len());
        assert_eq!(lines[2], "CannotBeZero(): 0x1e1d0ab5");
        assert_eq!(lines[9], "InvalidEnclaveSignature(address): 0x2880cb7f");
        assert_eq!(
            lines[43],
            "CannotRemoveDefaultImageFromMarket(uint256,bytes32): 0xb565f792"
        );
        assert_eq!(lines[58], "OnlyGeneratorCanDiscardRequest(uint256): 0x86d0ee98");
    }
}
