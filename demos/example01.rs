use cliopts::CliOpts;

fn main() {
    let values = CliOpts::from_text_spec(
        r#"
        <in_filename>
        -i, --id <id> specify an id (required)
        -o, --out <out_filename> output filename
        -v be verbose
        -h, --help show this help
        "#,
    )
    .unwrap_or_else(|error| panic!("{error}"))
    .terminal_width()
    .parse();

    println!("The values you supplied are:");

    for (name, value) in &values {
        match value.value() {
            Some(value) => println!("  {name}: {value}"),
            None => println!("  {name}"),
        }
    }
}
