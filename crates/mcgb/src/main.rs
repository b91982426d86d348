use anyhow::Result;
use mcgb::Program;

fn main() -> Result<()> {
    env_logger::init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "alu".to_string());
    let program = match Program::from_name(&name) {
        Some(program) => program,
        None => {
            eprintln!(
                "Unknown program '{}'. Supported: {}",
                name,
                Program::NAMES.join(", ")
            );
            std::process::exit(1);
        }
    };

    log::info!("Running built-in program {:?}", program);
    let regs = mcgb::run(program)?;
    println!("{regs}");
    Ok(())
}
