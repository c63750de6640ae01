use std::io::{self, BufRead, Write};
use std::process;

use bslpath::{DEFAULT_RULES, Error, ReplacementRule, RuleTable};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Style, Styles};

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);

#[derive(Parser, Debug)]
#[command(name = "bslpath", version, about, long_about = None)]
#[clap(styles = CARGO_STYLING)]
struct Cli {
    /// Paths to convert; read one per line from stdin when omitted
    #[arg()]
    paths: Vec<String>,

    /// Print `input<TAB>output` instead of just the output
    #[arg(long)]
    tsv: bool,

    /// List every rule that matched after each result
    #[arg(long)]
    explain: bool,

    /// Extra rule applied after the built-in ones (repeatable)
    #[arg(long = "rule", value_name = "SEARCH=REPLACE")]
    rules: Vec<String>,

    /// Do not load the built-in rules
    #[arg(long)]
    no_default_rules: bool,
}

fn build_table(cli: &Cli) -> Result<RuleTable<'_>, Error> {
    let mut rules: Vec<ReplacementRule<'_>> = if cli.no_default_rules {
        Vec::new()
    } else {
        DEFAULT_RULES.to_vec()
    };
    for definition in &cli.rules {
        rules.push(ReplacementRule::from_definition(definition)?);
    }
    log::debug!("using {} rules", rules.len());
    RuleTable::new(rules)
}

fn write_path<W: Write>(cli: &Cli, table: &RuleTable, path: &str, out: &mut W) -> Result<(), Error> {
    if path.is_empty() {
        writeln!(out)?;
        return Ok(());
    }

    let normalized = table.apply(path);
    if cli.tsv {
        writeln!(out, "{}\t{}", path, normalized)?;
    } else {
        writeln!(out, "{}", normalized)?;
    }

    if cli.explain {
        for step in table.explain(path) {
            writeln!(
                out,
                "  #{} '{}' -> '{}': {}",
                step.index + 1,
                step.rule.search,
                step.rule.replace,
                step.result
            )?;
        }
    }
    Ok(())
}

fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Result<(), Error> {
    let table = build_table(cli)?;

    if cli.paths.is_empty() {
        for line in input.lines() {
            write_path(cli, &table, &line?, out)?;
        }
    } else {
        for path in &cli.paths {
            write_path(cli, &table, path, out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(&cli, stdin.lock(), &mut stdout.lock()) {
        log::error!("{}", err);
        eprintln!("bslpath: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(args: &[&str], input: &str) -> Result<String, Error> {
        let cli = Cli::try_parse_from(std::iter::once("bslpath").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(&cli, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn converts_arguments() {
        let out = run_with(
            &[
                "src/configuration/Catalogs.Module.bsl",
                "src/configuration/Ext/ManagedApplicationModule.bsl",
            ],
            "",
        )
        .unwrap();
        assert_eq!(out, "Справочники.Модуль\nМодульУправляемогоПриложения\n");
    }

    #[test]
    fn reads_stdin_when_no_arguments() {
        let out = run_with(&[], "a/b/c\n\nsrc/Foo.bsl\r\n").unwrap();
        assert_eq!(out, "a.b/c\n\nFoo\n");
    }

    #[test]
    fn tsv_output() {
        let out = run_with(&["--tsv", "a/b/c"], "").unwrap();
        assert_eq!(out, "a/b/c\ta.b/c\n");
    }

    #[test]
    fn explain_output() {
        let out = run_with(&["--explain", "src/Foo.bsl"], "").unwrap();
        assert_eq!(
            out,
            "Foo\n  #7 '/' -> '.': src.Foo.bsl\n  #8 '.bsl' -> '': src.Foo\n  #29 'src.' -> '': Foo\n"
        );
    }

    #[test]
    fn extra_rules_run_after_defaults() {
        let out = run_with(
            &["--rule", "Documents.=Документы.", "Documents/Заказ/Ext/ObjectModule.bsl"],
            "",
        )
        .unwrap();
        assert_eq!(out, "Документы.Заказ.МодульОбъекта\n");
    }

    #[test]
    fn only_custom_rules() {
        let out = run_with(&["--no-default-rules", "--rule", "/=::", "a/b/c"], "").unwrap();
        assert_eq!(out, "a::b/c\n");
    }

    #[test]
    fn malformed_rule_is_rejected() {
        let err = run_with(&["--rule", "Documents", "x"], "").unwrap_err();
        assert!(matches!(err, Error::MalformedRule(ref def) if def == "Documents"));
    }

    #[test]
    fn empty_search_is_rejected() {
        let err = run_with(&["--no-default-rules", "--rule", "=x", "y"], "").unwrap_err();
        assert!(matches!(err, Error::EmptySearchValue { index: 0 }));
    }
}
