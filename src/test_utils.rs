// Copyright (c) 2024, MASQ (https://masq.ai) and/or its affiliates. All rights reserved.

use crate::categories::{Country, Operation};
use crate::command::StdStreams;
use crate::record_store::RecordStore;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::io::{Error, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub const BASE_TEST_DIR: &str = "generated/test";

pub fn store_home_directory(module: &str, name: &str) -> PathBuf {
    PathBuf::from(format!("{}/{}/{}/home", BASE_TEST_DIR, module, name))
}

pub fn ensure_store_home_directory_does_not_exist(module: &str, name: &str) -> PathBuf {
    let home_dir = store_home_directory(module, name);
    let _ = fs::remove_dir_all(&home_dir);
    home_dir
}

pub fn ensure_store_home_directory(module: &str, name: &str) -> PathBuf {
    let home_dir = ensure_store_home_directory_does_not_exist(module, name);
    let _ = fs::create_dir_all(&home_dir);
    home_dir
}

#[derive(Default)]
pub struct ByteArrayWriter {
    byte_array: Vec<u8>,
    next_error: Option<Error>,
}

impl ByteArrayWriter {
    pub fn new() -> ByteArrayWriter {
        Self::default()
    }

    pub fn get_bytes(&self) -> Vec<u8> {
        self.byte_array.clone()
    }

    pub fn get_string(&self) -> String {
        String::from_utf8(self.get_bytes()).unwrap()
    }

    pub fn reject_next_write(&mut self, error: Error) {
        self.next_error = Some(error);
    }
}

impl Write for ByteArrayWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(next_error) = self.next_error.take() {
            Err(next_error)
        } else {
            self.byte_array.extend_from_slice(buf);
            Ok(buf.len())
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Nothing this tool does reads stdin, so the holder carries an empty one.
pub struct FakeStreamHolder {
    pub stdin: io::Empty,
    pub stdout: ByteArrayWriter,
    pub stderr: ByteArrayWriter,
}

impl Default for FakeStreamHolder {
    fn default() -> Self {
        FakeStreamHolder {
            stdin: io::empty(),
            stdout: ByteArrayWriter::new(),
            stderr: ByteArrayWriter::new(),
        }
    }
}

impl FakeStreamHolder {
    pub fn new() -> FakeStreamHolder {
        Self::default()
    }

    pub fn streams(&mut self) -> StdStreams<'_> {
        StdStreams {
            stdin: &mut self.stdin,
            stdout: &mut self.stdout,
            stderr: &mut self.stderr,
        }
    }
}

#[derive(Default)]
pub struct RecordStoreMock {
    initialize_params: Arc<Mutex<Vec<()>>>,
    initialize_results: RefCell<Vec<Result<(), String>>>,
    load_ips_params: Arc<Mutex<Vec<(Operation, Country)>>>,
    load_ips_results: RefCell<Vec<Vec<String>>>,
}

impl RecordStore for RecordStoreMock {
    fn initialize(&self) -> Result<(), String> {
        self.initialize_params.lock().unwrap().push(());
        if self.initialize_results.borrow().is_empty() {
            Ok(())
        } else {
            self.initialize_results.borrow_mut().remove(0)
        }
    }

    fn load_ips(&self, operation: Operation, country: Country) -> Vec<String> {
        self.load_ips_params
            .lock()
            .unwrap()
            .push((operation, country));
        if self.load_ips_results.borrow().is_empty() {
            vec![]
        } else {
            self.load_ips_results.borrow_mut().remove(0)
        }
    }
}

impl RecordStoreMock {
    pub fn new() -> RecordStoreMock {
        Self::default()
    }

    pub fn initialize_params(mut self, params: &Arc<Mutex<Vec<()>>>) -> RecordStoreMock {
        self.initialize_params = params.clone();
        self
    }

    pub fn initialize_result(self, result: Result<(), String>) -> RecordStoreMock {
        self.initialize_results.borrow_mut().push(result);
        self
    }

    pub fn load_ips_params(
        mut self,
        params: &Arc<Mutex<Vec<(Operation, Country)>>>,
    ) -> RecordStoreMock {
        self.load_ips_params = params.clone();
        self
    }

    pub fn load_ips_result(self, result: Vec<String>) -> RecordStoreMock {
        self.load_ips_results.borrow_mut().push(result);
        self
    }
}
