use adder::try_add;
use anyhow::{Context, Result, bail};
use log::debug;
use std::env::args;

fn main() -> Result<()> {
    env_logger::init();

    let args = args().skip(1).collect::<Vec<_>>();

    let (left, right) = parse_args(&args)?;
    debug!("adding {left} and {right}");

    let sum = try_add(left, right)?;
    println!("{sum}");

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(i64, i64)> {
    let [left, right] = args else {
        bail!("usage: adder <LEFT> <RIGHT>");
    };
    Ok((parse_operand(left)?, parse_operand(right)?))
}

fn parse_operand(arg: &str) -> Result<i64> {
    arg.parse()
        .with_context(|| format!("failed to parse `{arg}` as an integer"))
}
