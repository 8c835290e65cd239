// Copyright (c) 2024, MASQ (https://masq.ai) and/or its affiliates. All rights reserved.

use crate::categories::{Country, Operation, COUNTRIES, OPERATIONS};
use std::fs;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub const BASE_DIR: &str = "ip_data";

pub trait RecordStore {
    fn initialize(&self) -> Result<(), String>;
    fn load_ips(&self, operation: Operation, country: Country) -> Vec<String>;
}

pub struct RecordStoreReal {
    base_dir: PathBuf,
}

impl RecordStore for RecordStoreReal {
    fn initialize(&self) -> Result<(), String> {
        for operation in OPERATIONS.iter() {
            let operation_dir = self.base_dir.join(operation.directory_name());
            fs::create_dir_all(&operation_dir)
                .map_err(|e| format!("Could not create directory {:?}: {}", operation_dir, e))?;
            for country in COUNTRIES.iter() {
                let record_file = self.record_file_path(*operation, *country);
                if !record_file.exists() {
                    OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(&record_file)
                        .map_err(|e| format!("Could not create file {:?}: {}", record_file, e))?;
                }
            }
        }
        Ok(())
    }

    fn load_ips(&self, operation: Operation, country: Country) -> Vec<String> {
        load_ip_list(&self.record_file_path(operation, country))
    }
}

impl RecordStoreReal {
    pub fn new(base_dir: &Path) -> RecordStoreReal {
        RecordStoreReal {
            base_dir: base_dir.to_path_buf(),
        }
    }

    pub fn record_file_path(&self, operation: Operation, country: Country) -> PathBuf {
        self.base_dir
            .join(operation.directory_name())
            .join(format!("{}.txt", country.name()))
    }
}

// One IP per line, surrounding whitespace trimmed, blank lines skipped. A
// missing or unreadable file is an empty list, never an error.
pub fn load_ip_list(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect(),
        Err(_) => vec![],
    }
}
