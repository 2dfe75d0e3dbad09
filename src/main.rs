use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};

use structopt::StructOpt;

use alq::cliopt::CliOpt;
use alq::error::{Error, ErrorKind};
use alq::input::LineReader;
use alq::logging::init_logging;
use alq::output::LineWriter;
use alq::runner::{QueryOptions, Runner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();
    init_logging(opt.verbose);

    let source: Box<dyn BufRead> = if opt.log_location == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&opt.log_location).map_err(|e| {
            Error::from((format!("couldn't open {}", opt.log_location), e)).kind_of(ErrorKind::Io)
        })?;
        Box::new(BufReader::new(file))
    };

    let runner = Runner::new(
        Box::new(LineReader::with_delimiter(source, opt.delimiter())),
        opt.format.formatter(),
        Box::new(LineWriter::with_delimiter(
            BufWriter::new(io::stdout()),
            opt.delimiter(),
        )),
        QueryOptions::from(&opt),
    );

    runner.run()?;

    Ok(())
}
