//! A worked example: printing a staff roster with Trestle.
//!
//! Run with `cargo run -p roster-example -- --help` to see the knobs. The
//! default invocation prints the roster once per showcase style; flags
//! narrow it down to a single configuration.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use trestle::{
    print_record_styled, print_table_styled, set_ambient, Align, Ambient, AmbientColor,
    BorderKind, CellStyle, Color, ColumnSpec, PrintMode, Table, TableRecord, TableStyle,
};

#[derive(Clone, Serialize)]
struct Person {
    id: u32,
    name: String,
    email: String,
    city: String,
}

impl TableRecord for Person {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("id")
                .header("Id")
                .cell_style(CellStyle::new().align(Align::Right)),
            ColumnSpec::new("name")
                .header("Name")
                .header_style(CellStyle::new().fg(Color::BrightCyan)),
            ColumnSpec::new("email").header("Email").hidden(),
            ColumnSpec::new("city")
                .header("City")
                .cell_style(CellStyle::new().fg(Color::Green).align(Align::Center)),
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.city.clone(),
        ]
    }
}

fn roster() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            name: "Alice Johnson".into(),
            email: "alice@example.com".into(),
            city: "Seattle".into(),
        },
        Person {
            id: 2,
            name: "Bob Smith".into(),
            email: "bob@example.com".into(),
            city: "Portland".into(),
        },
        Person {
            id: 3,
            name: "Charlie Potato".into(),
            email: "charlie.potato@example.com".into(),
            city: "San Francisco".into(),
        },
    ]
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BorderArg {
    Single,
    Bold,
    Double,
    Rounded,
    Dashed,
    Ascii,
}

impl From<BorderArg> for BorderKind {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Single => BorderKind::SingleLine,
            BorderArg::Bold => BorderKind::SingleBoldLine,
            BorderArg::Double => BorderKind::DoubleLine,
            BorderArg::Rounded => BorderKind::SingleCurvedLine,
            BorderArg::Dashed => BorderKind::SingleDashedLine,
            BorderArg::Ascii => BorderKind::ImprovedAscii,
        }
    }
}

/// Print a staff roster in a few table styles.
#[derive(Parser)]
#[command(name = "roster", version, about)]
struct Args {
    /// Border style for the single-table mode.
    #[arg(long, value_enum)]
    border: Option<BorderArg>,

    /// Emit a plain Markdown table instead of a styled one.
    #[arg(long)]
    markdown: bool,

    /// Draw a rule between consecutive rows.
    #[arg(long)]
    separators: bool,

    /// Reveal the table line by line.
    #[arg(long)]
    animate: bool,

    /// Declare ambient true-color sequences so the session restores them.
    #[arg(long)]
    ansi_host: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.ansi_host {
        set_ambient(Ambient {
            foreground: Some(AmbientColor::Sequence("\u{1b}[38;2;200;200;200m".into())),
            background: Some(AmbientColor::Sequence("\u{1b}[48;2;30;30;30m".into())),
        });
    }

    let people = roster();

    if args.markdown {
        let style = TableStyle {
            mode: PrintMode::Markdown,
            ..TableStyle::default()
        };
        print_table_styled(&people, &style)?;
        return Ok(());
    }

    if let Some(border) = args.border {
        let style = TableStyle {
            border: border.into(),
            row_separators: args.separators,
            animate: args.animate,
            ..TableStyle::default()
        };
        print_table_styled(&people, &style)?;
        return Ok(());
    }

    showcase(&people)?;
    Ok(())
}

/// The default tour: a few configurations worth seeing side by side.
fn showcase(people: &[Person]) -> Result<()> {
    let plain = TableStyle::default();
    print_table_styled(people, &plain)?;

    let double = TableStyle {
        border: BorderKind::DoubleLine,
        border_color: Some(Color::BrightBlue),
        header_style: CellStyle::new().fg(Color::BrightWhite).align(Align::Center),
        row_separators: true,
        separator_border: Some(BorderKind::SingleLine),
        v_margin: 1,
        ..TableStyle::default()
    };
    print_table_styled(people, &double)?;

    let rounded = TableStyle {
        border: BorderKind::SingleCurvedLine,
        h_margin: 4,
        data_style: CellStyle::new().fg(Color::BrightGreen),
        ..TableStyle::default()
    };
    print_table_styled(people, &rounded)?;

    // One record as a Property/Value card.
    print_record_styled(&people[0], &plain)?;

    // The same data extracted through serde by column key.
    let columns = vec![
        ColumnSpec::new("name").header("Name"),
        ColumnSpec::new("city").header("City"),
    ];
    Table::from_serialize(columns, people, plain)?.print()?;

    Ok(())
}
