use contactui::ContactUI;

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let submissions = ContactUI::new()
        .with_title("TechVision Solutions")
        .run()?;

    if submissions.is_empty() {
        eprintln!("no submissions captured");
    } else {
        println!("{}", serde_json::to_string_pretty(&submissions)?);
    }
    Ok(())
}
