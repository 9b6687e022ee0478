use mathlang::{Options, evaluate};

fn main() -> anyhow::Result<()> {
    let options = Options::default();

    for source in std::env::args().skip(1).filter(|arg| arg != "--") {
        let value = evaluate(&source, &options)?;
        println!("{value}");
    }

    Ok(())
}
