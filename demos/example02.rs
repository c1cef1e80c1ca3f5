use cliopts::{CliOpts, ColorMode, Outcome, Painter};

fn main() {
    let opts = CliOpts::from_text_spec(
        r#"
        Usage: {self} [options] <in_filename> [<more>]
        -i, --id <id> specify an id (required)
        -o, --out <out_filename> output filename
        -v be verbose
        -h, --help show this help
        "#,
    )
    .unwrap_or_else(|error| panic!("{error}"))
    // Handle validation ourselves.
    .validation(false);

    let values = match opts.evaluate(&std::env::args().collect::<Vec<String>>()) {
        Outcome::Help(help) => {
            println!("{help}");
            std::process::exit(0);
        }
        Outcome::Invalid { .. } => unreachable!("validation is disabled"),
        Outcome::Proceed(values) => values,
    };

    if !values.is_valid() {
        eprintln!("{}", Painter::new(ColorMode::Auto).alert("Errors:"));
        eprintln!("{}", values.error_text());
        eprintln!();
        println!("{}", opts.help_text(None));
        std::process::exit(1);
    }

    println!("The values you supplied are:");

    for (name, value) in &values {
        println!("  {name}: {value:?}");
    }

    for (offset, extra) in values.all_by_offset().iter().enumerate().skip(2) {
        println!("  extra value #{offset}: {extra}");
    }
}
