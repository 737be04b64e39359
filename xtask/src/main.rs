// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::path::PathBuf;
use std::process::Command as StdCommand;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "x", about = "Project maintenance tasks", long_about = None)]
struct Command {
    #[command(subcommand)]
    sub: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Check formatting and run clippy with warnings denied.
    Lint {
        /// Rewrite sources instead of only checking them.
        #[arg(long)]
        fix: bool,
    },
    /// Run the workspace tests.
    Test {
        /// Show output of passing tests.
        #[arg(long)]
        no_capture: bool,
    },
    /// Build the workspace.
    Build {
        #[arg(long)]
        release: bool,
    },
}

impl SubCommand {
    fn run(self) -> Result<(), String> {
        match self {
            SubCommand::Lint { fix } => {
                let mut fmt = cargo()?;
                fmt.args(["fmt", "--all"]);
                if !fix {
                    fmt.arg("--check");
                }
                execute(fmt)?;

                let mut clippy = cargo()?;
                clippy.args(["clippy", "--workspace", "--all-targets", "--all-features"]);
                if fix {
                    clippy.args(["--fix", "--allow-staged", "--allow-dirty"]);
                }
                clippy.args(["--", "-D", "warnings"]);
                execute(clippy)
            }
            SubCommand::Test { no_capture } => {
                let mut test = cargo()?;
                test.args(["test", "--workspace", "--all-features"]);
                if no_capture {
                    test.args(["--", "--nocapture"]);
                }
                execute(test)
            }
            SubCommand::Build { release } => {
                let mut build = cargo()?;
                build.args(["build", "--workspace", "--all-features"]);
                if release {
                    build.arg("--release");
                }
                execute(build)
            }
        }
    }
}

fn cargo() -> Result<StdCommand, String> {
    let path: PathBuf = which::which("cargo").map_err(|err| format!("cannot find cargo: {err}"))?;
    Ok(StdCommand::new(path))
}

fn execute(mut command: StdCommand) -> Result<(), String> {
    println!("$ {command:?}");
    let status = command
        .status()
        .map_err(|err| format!("failed to spawn {command:?}: {err}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{command:?} exited with {status}"))
    }
}

fn main() -> ExitCode {
    let command = Command::parse();
    match command.sub.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
