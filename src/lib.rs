// Copyright (c) 2024, MASQ (https://masq.ai) and/or its affiliates. All rights reserved.

pub mod categories;
pub mod command;
pub mod ip_checker;
pub mod lookup;
pub mod record_store;
pub mod report;
#[cfg(test)]
mod test_utils;
