// Copyright (c) 2024, MASQ (https://masq.ai) and/or its affiliates. All rights reserved.

use crate::command::{Command, StdStreams};
use crate::lookup::{check_ip, LookupReport};
use crate::record_store::{load_ip_list, RecordStore, RecordStoreReal, BASE_DIR};
use crate::report::{format_report, format_summary, HOW_TO_ADD_IPS_HINT};
use clap::{crate_version, App, Arg, ErrorKind};
use std::io::Write;
use std::path::Path;

const ABOUT: &str = "Check IPs against operations and countries";
const IP_HELP: &str = "Single IP address to check";
const FILE_HELP: &str = "File containing multiple IPs to check (one per line)";
const MISSING_INPUT_ERROR: &str = "Please provide either --ip or --file argument";

pub struct IpChecker {
    store: Box<dyn RecordStore>,
}

impl Default for IpChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Command<u8> for IpChecker {
    // Always 0: every failure is reported as printed text, never as an exit code.
    fn go(&mut self, streams: &mut StdStreams<'_>, args: &[String]) -> u8 {
        match self.run(streams, args) {
            Ok(()) => 0,
            Err(msg) => {
                writeln!(streams.stdout, "Error: {}", msg).expect("Could not writeln");
                0
            }
        }
    }
}

impl IpChecker {
    pub fn new() -> IpChecker {
        Self::with_base_dir(Path::new(BASE_DIR))
    }

    pub fn with_base_dir(base_dir: &Path) -> IpChecker {
        IpChecker {
            store: Box::new(RecordStoreReal::new(base_dir)),
        }
    }

    fn run(&self, streams: &mut StdStreams<'_>, args: &[String]) -> Result<(), String> {
        self.store.initialize()?;
        let matches = match app().get_matches_from_safe(args) {
            Ok(matches) => matches,
            Err(e)
                if e.kind == ErrorKind::HelpDisplayed
                    || e.kind == ErrorKind::VersionDisplayed =>
            {
                writeln!(streams.stdout, "{}", e.message).map_err(|e| e.to_string())?;
                return Ok(());
            }
            Err(e) => return Err(e.message),
        };
        let mut ips_to_check: Vec<String> = vec![];
        if let Some(target_ip) = matches.value_of("ip") {
            ips_to_check.push(target_ip.to_string());
        }
        let batch_mode = matches.is_present("file");
        if let Some(ip_list_file) = matches.value_of("file") {
            ips_to_check.extend(load_ip_list(Path::new(ip_list_file)));
        }
        if ips_to_check.is_empty() {
            writeln!(streams.stdout, "Error: {}", MISSING_INPUT_ERROR)
                .map_err(|e| e.to_string())?;
            return Ok(());
        }
        let mut all_results: Vec<(String, LookupReport)> = vec![];
        for target_ip in ips_to_check {
            let result = check_ip(self.store.as_ref(), &target_ip);
            writeln!(streams.stdout, "{}", format_report(&target_ip, &result))
                .map_err(|e| e.to_string())?;
            writeln!(streams.stdout, "\n{}\n", "=".repeat(50)).map_err(|e| e.to_string())?;
            all_results.push((target_ip, result));
        }
        if batch_mode {
            writeln!(streams.stdout, "\n{}", format_summary(&all_results))
                .map_err(|e| e.to_string())?;
        } else {
            writeln!(streams.stdout, "{}", HOW_TO_ADD_IPS_HINT).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

fn app() -> App<'static, 'static> {
    App::new("ip_checker")
        .version(crate_version!())
        .about(ABOUT)
        .arg(
            Arg::with_name("ip")
                .long("ip")
                .value_name("IP")
                .takes_value(true)
                .help(IP_HELP),
        )
        .arg(
            Arg::with_name("file")
                .long("file")
                .value_name("FILE")
                .takes_value(true)
                .help(FILE_HELP),
        )
}
