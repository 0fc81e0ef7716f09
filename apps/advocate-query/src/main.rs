use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = advocate_query::Args::parse();
	let output = advocate_query::run(args).await?;

	println!("{output}");

	Ok(())
}
