// Copyright (c) 2024, MASQ (https://masq.ai) and/or its affiliates. All rights reserved.

use crate::lookup::LookupReport;
use itertools::Itertools;

pub const HOW_TO_ADD_IPS_HINT: &str = "\
To record new IPs, add them to ip_data/<operation>/<country>.txt, one per line.
Operations: creating, redeeming, farming. Countries: India, US, Brazil.";

pub fn format_report(target_ip: &str, report: &LookupReport) -> String {
    let mut lines = vec![format!("Report for IP: {}", target_ip), "-".repeat(40)];
    report.findings.iter().for_each(|(operation, countries)| {
        if countries.is_empty() {
            lines.push(format!("This IP was not used in {} accounts", operation));
        } else {
            lines.push(format!(
                "This IP was used in {} accounts in: {}",
                operation,
                countries.iter().join(", ")
            ));
        }
    });
    lines.join("\n")
}

pub fn format_summary(results: &[(String, LookupReport)]) -> String {
    let mut lines = vec!["SUMMARY REPORT".to_string(), "==============".to_string()];
    results.iter().for_each(|(target_ip, report)| {
        let operations = report.operations_found();
        if operations.is_empty() {
            lines.push(format!("{}: Not found in any operations", target_ip));
        } else {
            lines.push(format!(
                "{}: Found in {}",
                target_ip,
                operations.iter().join(", ")
            ));
        }
    });
    lines.join("\n")
}
