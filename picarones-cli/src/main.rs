use std::io::Write;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use picarones::{
    render_results, validate, ClientConfig, FormState, SearchClient, SearchMode, SearchRequest,
    SearchSession,
};

/// Terminal client for the picarones search backend.
///
/// With `--description`, `--title` or `--dry-run` the process runs one
/// search and exits; otherwise it opens an interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "picarones", version, about = "Multi-mode product search client")]
struct Cli {
    /// Base URL of the search backend.
    #[arg(long, env = "PICARONES_BASE_URL")]
    base_url: Option<String>,

    /// Search mode: vector, fulltext or hybrid.
    #[arg(long, default_value = "vector")]
    mode: SearchMode,

    /// Description text. Required for vector and hybrid searches.
    #[arg(long)]
    description: Option<String>,

    /// Title text. Required for full-text and hybrid searches.
    #[arg(long)]
    title: Option<String>,

    /// Only match products currently available.
    #[arg(long)]
    available: bool,

    /// Maximum price filter. Passing the flag enables the filter.
    #[arg(long)]
    max_price: Option<f64>,

    /// Restrict matches to one restaurant.
    #[arg(long)]
    restaurant: Option<String>,

    /// Number of results to request.
    #[arg(long, env = "PICARONES_LIMIT")]
    limit: Option<usize>,

    /// Request timeout in seconds. Unbounded when absent.
    #[arg(long, env = "PICARONES_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Build and print the request body without sending it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let one_shot = cli.description.is_some() || cli.title.is_some() || cli.dry_run;
    let code = if one_shot {
        run_one_shot(&cli, &config).await
    } else {
        run_interactive(&config, cli.mode).await
    };
    if code != 0 {
        std::process::exit(code);
    }
}

/// Merge CLI flags over the defaults. Flags fall back to `PICARONES_*`
/// variables through clap's `env` attribute, so precedence is flag, then
/// environment, then default.
fn resolve_config(cli: &Cli) -> picarones::Result<ClientConfig> {
    let mut config = ClientConfig::default();
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if let Some(limit) = cli.limit {
        if limit > 0 {
            config.default_limit = limit;
        } else {
            tracing::warn!("Ignoring limit 0, keeping {}", config.default_limit);
        }
    }
    if let Some(secs) = cli.timeout_secs {
        if secs > 0 {
            config.timeout = Some(Duration::from_secs(secs));
        } else {
            tracing::warn!("Ignoring timeout 0, keeping requests unbounded");
        }
    }
    Ok(config)
}

fn form_from_cli(cli: &Cli) -> FormState {
    let mut form = FormState::new();
    form.mode = cli.mode;
    if let Some(description) = &cli.description {
        form.description = description.clone();
    }
    if let Some(title) = &cli.title {
        form.title = title.clone();
    }
    form.available = cli.available;
    if let Some(max_price) = cli.max_price {
        if max_price >= 0.0 {
            form.price_slider = max_price;
            form.price_enabled = true;
        } else {
            tracing::warn!("Ignoring negative max price {}", max_price);
        }
    }
    if let Some(restaurant) = &cli.restaurant {
        form.restaurant = restaurant.clone();
    }
    form
}

fn build_request(form: &FormState, config: &ClientConfig) -> picarones::Result<SearchRequest> {
    let snapshot = form.snapshot();
    let query = validate(snapshot.selected_mode, &snapshot)?;
    Ok(SearchRequest::new(query, snapshot.filters()).with_limit(config.default_limit))
}

/// Run one submission and print whatever it produced. Validation stops
/// before the network; failures of any kind render as a single fallback
/// line in place of results.
async fn submit_and_render(session: &SearchSession, form: &FormState, config: &ClientConfig) {
    let request = match build_request(form, config) {
        Ok(request) => request,
        Err(e) => {
            print_lines(&render_results(&[], form.mode, Some(&e.user_message())));
            return;
        }
    };

    match session.submit(&request).await {
        // Superseded by a newer submission; render nothing.
        None => {}
        Some(Ok(response)) => {
            let mode = response.effective_mode(request.mode());
            print_lines(&render_results(&response.results, mode, None));
        }
        Some(Err(e)) => {
            tracing::warn!("Search failed: {}", e);
            print_lines(&render_results(&[], request.mode(), Some(&e.user_message())));
        }
    }
}

async fn run_one_shot(cli: &Cli, config: &ClientConfig) -> i32 {
    let form = form_from_cli(cli);

    if cli.dry_run {
        return match build_request(&form, config) {
            Ok(request) => print_dry_run(&request),
            Err(e) => {
                print_lines(&render_results(&[], form.mode, Some(&e.user_message())));
                0
            }
        };
    }

    let session = SearchSession::new(SearchClient::new(config));
    submit_and_render(&session, &form, config).await;
    0
}

fn print_dry_run(request: &SearchRequest) -> i32 {
    match serde_json::to_string_pretty(&request.body()) {
        Ok(payload) => {
            println!("{}", payload);
            println!("Dry run, nothing sent.");
            0
        }
        Err(e) => {
            eprintln!("ERROR: failed to encode request body: {}", e);
            1
        }
    }
}

async fn run_interactive(config: &ClientConfig, initial_mode: SearchMode) -> i32 {
    let session = SearchSession::new(SearchClient::new(config));
    let mut form = FormState::new();
    form.mode = initial_mode;

    print_banner(config);

    let restaurant_options = match session.client().restaurants().await {
        Ok(names) => {
            if !names.is_empty() {
                println!("Restaurantes: {}", names.join(", "));
            }
            names
        }
        Err(e) => {
            tracing::warn!("{}", e);
            println!("{}", e.user_message());
            Vec::new()
        }
    };

    let stdin = std::io::stdin();
    loop {
        print!("{} ", "picarones>".cyan().bold());
        if std::io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "mode" => match rest.parse::<SearchMode>() {
                Ok(mode) => {
                    form.mode = mode;
                    println!("Modo: {}", mode);
                }
                Err(e) => println!("{}", e),
            },
            "desc" => {
                form.description = rest.to_string();
                println!("Descripción: {}", display_or_dashes(&form.description));
            }
            "title" => {
                form.title = rest.to_string();
                println!("Título: {}", display_or_dashes(&form.title));
            }
            "available" => {
                let checked = form.toggle_available();
                println!("Disponible: {}", if checked { "Sí" } else { "No" });
            }
            "price" => match rest.parse::<f64>() {
                Ok(value) if value >= 0.0 => {
                    form.price_slider = value;
                    println!("Precio máximo: {}", price_display(&form));
                }
                _ => println!("Uso: price <número>"),
            },
            "toggle-price" => {
                let enabled = form.toggle_price();
                println!(
                    "Filtro de precio: {}",
                    if enabled { "habilitado" } else { "deshabilitado" }
                );
                println!("Precio máximo: {}", price_display(&form));
            }
            "restaurant" => {
                form.restaurant = rest.to_string();
                println!("Restaurante: {}", display_or_dashes(&form.restaurant));
            }
            "restaurants" => {
                if restaurant_options.is_empty() {
                    println!("(ninguno)");
                } else {
                    for name in &restaurant_options {
                        println!("{}", name);
                    }
                }
            }
            "show" => print_form(&form, config),
            "search" => submit_and_render(&session, &form, config).await,
            _ => {
                // Free text feeds the mode's primary field, then searches.
                if form.mode.uses_description() {
                    form.description = input.to_string();
                } else {
                    form.title = input.to_string();
                }
                submit_and_render(&session, &form, config).await;
            }
        }
    }
    0
}

fn display_or_dashes(value: &str) -> &str {
    if value.trim().is_empty() {
        "--"
    } else {
        value
    }
}

fn price_display(form: &FormState) -> String {
    if form.price_enabled {
        format!("{:.2}", form.price_slider)
    } else {
        "--".to_string()
    }
}

fn print_form(form: &FormState, config: &ClientConfig) {
    println!("Modo: {}", form.mode);
    println!("Descripción: {}", display_or_dashes(&form.description));
    println!("Título: {}", display_or_dashes(&form.title));
    println!("Disponible: {}", if form.available { "Sí" } else { "No" });
    println!("Precio máximo: {}", price_display(form));
    println!("Restaurante: {}", display_or_dashes(&form.restaurant));
    println!("Límite: {}", config.default_limit);
}

fn print_banner(config: &ClientConfig) {
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!(
        "  {} {}",
        "🍩 Picarones".bold().bright_green(),
        version.as_str().dimmed()
    );
    println!();
    println!(
        "  {}  Backend:   {}",
        "➜".green(),
        config.base_url.as_str().cyan()
    );
    println!("  {}  Comandos:  {}", "➜".green(), "help".cyan());
    println!();
}

fn print_help() {
    println!("Comandos:");
    println!("  mode <vector|fulltext|hybrid>  elegir el modo de búsqueda");
    println!("  desc <texto>                   fijar la descripción");
    println!("  title <texto>                  fijar el título");
    println!("  available                      alternar el filtro de disponibilidad");
    println!("  price <número>                 mover el control de precio máximo");
    println!("  toggle-price                   habilitar o deshabilitar el filtro de precio");
    println!("  restaurant [nombre]            fijar o limpiar el restaurante");
    println!("  restaurants                    listar los restaurantes conocidos");
    println!("  show                           mostrar el formulario actual");
    println!("  search                         buscar con el formulario actual");
    println!("  quit                           salir");
    println!();
    println!("Cualquier otro texto fija el campo principal del modo y busca.");
}

fn print_lines(lines: &[String]) {
    println!();
    for line in lines {
        println!("{}", line);
    }
}
