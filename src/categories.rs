// Copyright (c) 2024, MASQ (https://masq.ai) and/or its affiliates. All rights reserved.

use lazy_static::lazy_static;
use std::fmt;

lazy_static! {
    pub static ref OPERATIONS: Vec<Operation> = vec![
        Operation::Creating,
        Operation::Redeeming,
        Operation::Farming,
    ];
    pub static ref COUNTRIES: Vec<Country> =
        vec![Country::India, Country::Us, Country::Brazil];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Creating,
    Redeeming,
    Farming,
}

impl Operation {
    pub fn directory_name(&self) -> &'static str {
        match self {
            Operation::Creating => "creating",
            Operation::Redeeming => "redeeming",
            Operation::Farming => "farming",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.directory_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Country {
    India,
    Us,
    Brazil,
}

impl Country {
    // Also the on-disk file stem: <base>/<operation>/<name>.txt
    pub fn name(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Us => "US",
            Country::Brazil => "Brazil",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
