mod commands;
mod input;
mod output;
mod session;

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use colored::Colorize;

use risco_core::RiskBands;
use session::Session;

/// Interactive console for loan-contract risk aggregation
#[derive(Parser)]
#[command(
    name = "risco",
    version,
    about = "Agregação de contratos e classificação de risco por cliente",
    long_about = "Lê uma tabela de contratos de clientes, agrega estatísticas por \
                  cliente, classifica cada cliente em uma faixa de risco e gera \
                  relatórios por faixa."
)]
struct Cli {
    /// Arquivo CSV de contratos
    #[arg(long, default_value = "data/contratos_clientes.csv")]
    data: String,

    /// Arquivo JSON com uma tabela de faixas de risco alternativa
    #[arg(long)]
    bands: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "erro".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let bands = match &cli.bands {
        Some(path) => input::bands::read_bands(path)?,
        None => RiskBands::default(),
    };

    println!("Lendo tabela de contratos...");
    let records = input::records::read_records(&cli.data)?;
    println!("Dataset preparado!\n");

    let mut session = Session::new(bands, records);
    let stdin = io::stdin();

    loop {
        print_menu(&session);
        let code = match read_line(&mut stdin.lock())? {
            Some(line) => line,
            None => break, // EOF
        };

        if code.eq_ignore_ascii_case("quit") {
            break;
        }

        let outcome = match code.as_str() {
            "1" => commands::recompute(&mut session),
            "2" => match prompt(&stdin, "Nome do arquivo da tabela agregada: ")? {
                Some(path) => commands::load_table(&mut session, &path),
                None => break,
            },
            "3" => match require_table_then_prompt(&session, &stdin, "Nome do arquivo de saída: ")? {
                Some(path) => commands::save_table(&session, &path),
                None => continue,
            },
            "4" => commands::show_summary(&session),
            "5" => match require_table_then_prompt(&session, &stdin, "Nome do arquivo de saída: ")? {
                Some(path) => commands::export_dataset(&session, &path),
                None => continue,
            },
            _ => {
                println!("Código de operação inválido. Tente novamente.\n");
                continue;
            }
        };

        // A failed operation is reported and leaves prior state untouched;
        // the loop stays re-entrant.
        if let Err(e) = outcome {
            eprintln!("{}: {}\n", "erro".red().bold(), e);
        }
    }

    Ok(())
}

fn print_menu(session: &Session) {
    println!("Features de Risco Bancário! Digite uma operação a ser feita.");
    println!(
        "Tabela agregada {}DISPONÍVEL.",
        if session.has_table() { "" } else { "NÃO " }
    );
    println!("\t1 -> (re)calcular a tabela agregada");
    println!("\t2 -> ler a tabela agregada de um arquivo");
    println!("\t3 -> escrever tabela agregada em um arquivo");
    println!("\t4 -> ver dados de risco por faixa na tela");
    println!("\t5 -> escrever dataset pre-processado em um arquivo");
    println!("\tquit -> fechar o programa\n");
    print!("Operação: ");
    let _ = io::stdout().flush();
}

/// Skip the filename prompt entirely when no table exists yet; the
/// accessor failure carries the message.
fn require_table_then_prompt(
    session: &Session,
    stdin: &io::Stdin,
    message: &str,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if let Err(e) = session.table() {
        eprintln!("{}: {}\n", "erro".red().bold(), e);
        return Ok(None);
    }
    prompt(stdin, message)
}

fn prompt(stdin: &io::Stdin, message: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
    print!("{message}");
    io::stdout().flush()?;
    Ok(read_line(&mut stdin.lock())?)
}

/// One trimmed line of input; `None` on EOF.
fn read_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
