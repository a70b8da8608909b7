use anyhow::Result;

fn main() -> Result<()> {
    let doc = probau::probau::openapi();
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
