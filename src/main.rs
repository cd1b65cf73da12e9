/*!
 * Command-line interface for cpdr
 */

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cpdr::config::{Args, Config};
use cpdr::pipeline::Pipeline;
use cpdr::report::Reporter;

fn main() -> ExitCode {
    // Parse command line arguments; any parse failure (including zero
    // paths) exits with code 1
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // help and version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        generate(shell, &mut cmd, "cpdr", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::from(1);
    }

    let debug = config.debug;
    let pipeline = Pipeline::new(config);
    match pipeline.run() {
        Ok(report) => {
            Reporter::new(debug).print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
