use colored::Colorize;

const LOGO: &str = r"
     _ _     _       __       _ _
 ___| (_) __| | ___ / _| ___ | (_) ___
/ __| | |/ _` |/ _ \ |_ / _ \| | |/ _ \
\__ \ | | (_| |  __/  _| (_) | | | (_) |
|___/_|_|\__,_|\___|_|  \___/|_|_|\___/
";

pub fn print_banner_with_version() {
    println!("{}", LOGO.trim_start_matches('\n').cyan().bold());
    println!(
        "  {} {}",
        "slidefolio".bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).green()
    );
    println!("  {}", env!("CARGO_PKG_DESCRIPTION").dimmed());
}
