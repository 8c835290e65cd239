// Copyright (c) 2024, MASQ (https://masq.ai) and/or its affiliates. All rights reserved.

use ip_checker_lib::command::Command;
use ip_checker_lib::command::StdStreams;
use ip_checker_lib::ip_checker::IpChecker;
use std::io;

pub fn main() {
    let mut streams: StdStreams<'_> = StdStreams {
        stdin: &mut io::stdin(),
        stdout: &mut io::stdout(),
        stderr: &mut io::stderr(),
    };

    let mut command = IpChecker::new();
    let args = std::env::args().collect::<Vec<String>>();
    let exit_code = command.go(&mut streams, &args);
    ::std::process::exit(exit_code as i32);
}
