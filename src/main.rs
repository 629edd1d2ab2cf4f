use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::Confirm;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tabled::{settings::Style, Table, Tabled};

use invoice_cli::api::{ApiClient, CompanyProfile, DriveStatus, Party, PartyPayload};
use invoice_cli::config::{config_dir, load_settings, FormOptions, Settings, SETTINGS_TEMPLATE};
use invoice_cli::error::{InvoiceError, Result};
use invoice_cli::invoice::{
    fallback_invoice_number, parse_item_input, submit_invoice, suggestions_for, DriveLink,
    InvoiceDraft,
};

#[derive(Parser)]
#[command(name = "invoice-cli")]
#[command(version, about = "Command-line invoicing front end", long_about = None)]
struct Cli {
    /// Path to settings directory (default: ~/.invoice-cli or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the settings directory with a template file
    Init,

    /// Show backend and storage-integration health
    Status,

    /// Create an invoice and push it to the backend
    New {
        /// Client id or company name
        #[arg(short, long)]
        party: Option<String>,

        /// Invoice number (default: the server's suggested next number)
        #[arg(short, long)]
        number: Option<String>,

        /// Issue date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Payment term (default: the client's configured term)
        #[arg(long)]
        payment_term: Option<String>,

        /// Line items (can be repeated)
        #[arg(short, long, value_name = "DESC:RATE:QTY:UNIT[:GROUP]")]
        item: Vec<String>,

        /// Files to attach after creation (can be repeated)
        #[arg(short, long, value_name = "FILE")]
        attach: Vec<PathBuf>,
    },

    /// Print description suggestions for a line-item group
    Suggest {
        /// Group name to look up
        #[arg(short, long)]
        group: String,
    },

    /// Show the configured authoring pick lists
    Options,

    /// Print the next invoice number
    NextNumber,

    /// List clients
    Parties,

    /// Add a client
    AddParty {
        /// Company name
        company_name: String,

        #[arg(long)]
        contact_person: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        vat_number: Option<String>,

        /// Default payment term for this client (e.g. "30 days")
        #[arg(long)]
        payment_term: Option<String>,
    },

    /// Edit a client (only the given fields change)
    EditParty {
        /// Client id from 'parties'
        id: i64,

        #[arg(long)]
        company_name: Option<String>,

        #[arg(long)]
        contact_person: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        vat_number: Option<String>,

        #[arg(long)]
        payment_term: Option<String>,
    },

    /// Delete a client
    RemoveParty {
        /// Client id from 'parties'
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List invoices
    List {
        /// Number of invoices to show (default: all)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one invoice with its line items and storage links
    Show {
        /// Invoice id from 'list'
        id: i64,
    },

    /// Delete an invoice
    Remove {
        /// Invoice id from 'list'
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Attach more files to an existing invoice
    Upload {
        /// Invoice id from 'list'
        id: i64,

        /// Files to upload
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Show the company profile
    Profile,

    /// Update company profile fields (the record is replaced wholesale)
    EditProfile {
        #[arg(long)]
        brand_name: Option<String>,

        #[arg(long)]
        legal_name: Option<String>,

        #[arg(long)]
        siret: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        iban: Option<String>,

        #[arg(long)]
        bic: Option<String>,

        #[arg(long)]
        vat_note: Option<String>,
    },
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Status => cmd_status(&cfg_dir),
        Commands::New {
            party,
            number,
            date,
            payment_term,
            item,
            attach,
        } => cmd_new(&cfg_dir, party, number, date, payment_term, &item, attach),
        Commands::Suggest { group } => cmd_suggest(&cfg_dir, &group),
        Commands::Options => cmd_options(&cfg_dir),
        Commands::NextNumber => cmd_next_number(&cfg_dir),
        Commands::Parties => cmd_parties(&cfg_dir),
        Commands::AddParty {
            company_name,
            contact_person,
            address,
            city,
            vat_number,
            payment_term,
        } => cmd_add_party(
            &cfg_dir,
            PartyPayload {
                company_name,
                contact_person,
                address,
                city,
                vat_number,
                payment_term,
            },
        ),
        Commands::EditParty {
            id,
            company_name,
            contact_person,
            address,
            city,
            vat_number,
            payment_term,
        } => cmd_edit_party(
            &cfg_dir,
            id,
            company_name,
            contact_person,
            address,
            city,
            vat_number,
            payment_term,
        ),
        Commands::RemoveParty { id, yes } => cmd_remove_party(&cfg_dir, id, yes),
        Commands::List { limit } => cmd_list(&cfg_dir, limit),
        Commands::Show { id } => cmd_show(&cfg_dir, id),
        Commands::Remove { id, yes } => cmd_remove(&cfg_dir, id, yes),
        Commands::Upload { id, files } => cmd_upload(&cfg_dir, id, &files),
        Commands::Profile => cmd_profile(&cfg_dir),
        Commands::EditProfile {
            brand_name,
            legal_name,
            siret,
            phone,
            email,
            address,
            iban,
            bic,
            vat_note,
        } => cmd_edit_profile(
            &cfg_dir,
            brand_name,
            legal_name,
            siret,
            phone,
            email,
            address,
            iban,
            bic,
            vat_note,
        ),
    }
}

/// Initialize the settings directory with a template file
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(InvoiceError::AlreadyInitialized(cfg_dir.to_path_buf()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join("settings.toml"), SETTINGS_TEMPLATE)?;

    println!("Initialized invoice-cli settings at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Point it at your backend:  $EDITOR {}/settings.toml",
        cfg_dir.display()
    );
    println!("  2. Check the connection:      invoice-cli status");
    println!();
    println!("Then create your first invoice:");
    println!("  invoice-cli new --party <id|name> --item <desc>:<rate>:<qty>:<unit>");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct PartyRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "COMPANY")]
    company: String,
    #[tabled(rename = "CONTACT")]
    contact: String,
    #[tabled(rename = "CITY")]
    city: String,
    #[tabled(rename = "VAT")]
    vat: String,
    #[tabled(rename = "TERMS")]
    terms: String,
}

#[derive(Tabled)]
struct InvoiceRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "CLIENT")]
    client: String,
    #[tabled(rename = "TOTAL")]
    total: String,
    #[tabled(rename = "TERMS")]
    terms: String,
    #[tabled(rename = "DRIVE")]
    drive: String,
}

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "GROUP")]
    group: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "RATE")]
    rate: String,
    #[tabled(rename = "QTY")]
    qty: String,
    #[tabled(rename = "UNIT")]
    unit: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

fn format_grouped_int(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let mut grouped: String = out.chars().rev().collect();
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

/// Format a money amount with two decimal places and thousands separators
fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    let parts: Vec<&str> = rounded.split('.').collect();
    let whole = parts[0];
    let frac = parts[1];

    let negative = whole.starts_with('-');
    let digits = if negative { &whole[1..] } else { whole };
    let grouped = format_grouped_int(digits.parse::<i64>().unwrap_or(0));

    if negative {
        format!("-{}.{}", grouped, frac)
    } else {
        format!("{}.{}", grouped, frac)
    }
}

fn money(settings: &Settings, value: f64) -> String {
    format!("{}{}", settings.display.currency_symbol, format_amount(value))
}

fn dash(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => "-".to_string(),
    }
}

fn settings_checked(cfg_dir: &Path) -> Result<Settings> {
    if !cfg_dir.exists() {
        return Err(InvoiceError::SettingsNotFound(cfg_dir.to_path_buf()));
    }
    load_settings(cfg_dir)
}

fn api_client(settings: &Settings) -> Result<ApiClient> {
    ApiClient::new(
        &settings.base_url(),
        Duration::from_secs(settings.server.timeout_secs),
    )
}

/// Ask before a destructive call. Returns false when the user declines;
/// fails when no answer can be collected and --yes was not given.
fn confirm_deletion(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(InvoiceError::NotConfirmed);
    }
    match Confirm::new(prompt).with_default(false).prompt() {
        Ok(answer) => Ok(answer),
        Err(inquire::InquireError::OperationCanceled)
        | Err(inquire::InquireError::OperationInterrupted) => Ok(false),
        Err(_) => Err(InvoiceError::NotConfirmed),
    }
}

/// Resolve a client reference (numeric id or company name) against the
/// server's party list.
fn resolve_party(api: &ApiClient, reference: &str) -> Result<Party> {
    let parties = api.list_parties()?;

    if let Ok(id) = reference.parse::<i64>() {
        if let Some(party) = parties.iter().find(|p| p.id == id) {
            return Ok(party.clone());
        }
    }

    parties
        .iter()
        .find(|p| p.company_name.eq_ignore_ascii_case(reference))
        .cloned()
        .ok_or_else(|| InvoiceError::PartyNotFound(reference.to_string()))
}

fn advisory_or_fallback(api: &ApiClient, today: NaiveDate) -> String {
    match api.next_invoice_number() {
        Ok(next) => next.invoice_number,
        Err(e) => {
            log::warn!("advisory invoice number unavailable: {e}");
            let invoices = api.list_invoices().unwrap_or_else(|e| {
                log::warn!("invoice list unavailable: {e}");
                Vec::new()
            });
            fallback_invoice_number(&invoices, today)
        }
    }
}

/// Create an invoice and push it to the backend
fn cmd_new(
    cfg_dir: &Path,
    party: Option<String>,
    number: Option<String>,
    date: Option<String>,
    payment_term: Option<String>,
    items_input: &[String],
    attach: Vec<PathBuf>,
) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;

    // Everything client-side is checked before the first request goes out.
    let party_ref = party.ok_or(InvoiceError::NoPartySelected)?;

    let date = match date {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| InvoiceError::InvalidDate(s))?,
        None => Local::now().date_naive(),
    };

    if items_input.is_empty() {
        return Err(InvoiceError::NoItems);
    }
    let items = items_input
        .iter()
        .map(|input| parse_item_input(input))
        .collect::<Result<Vec<_>>>()?;

    let mut draft = InvoiceDraft {
        party_id: None,
        invoice_number: number.unwrap_or_default(),
        date,
        payment_term,
        items,
        attachments: attach,
    };
    draft.validate_items()?;
    for file in &draft.attachments {
        if !file.exists() {
            return Err(InvoiceError::AttachmentNotFound(file.clone()));
        }
    }

    let api = api_client(&settings)?;

    let party = resolve_party(&api, &party_ref)?;
    draft.party_id = Some(party.id);

    if draft.invoice_number.is_empty() {
        draft.invoice_number = advisory_or_fallback(&api, date);
    }

    let outcome = submit_invoice(&api, &draft)?;

    println!(
        "Created invoice {} (id {})",
        outcome.invoice.invoice_number, outcome.invoice.id
    );
    println!("  Client: {}", party.company_name);
    println!("  Date:   {}", outcome.invoice.date);
    println!("  Total:  {}", money(&settings, outcome.invoice.total()));

    if outcome.uploads.attempted() > 0 {
        match &outcome.uploads.failed {
            None => println!(
                "  Attachments: {} uploaded",
                outcome.uploads.uploaded.len()
            ),
            Some((file, reason)) => println!(
                "  Attachments: {} of {} uploaded ('{}' failed: {}; {} skipped)",
                outcome.uploads.uploaded.len(),
                outcome.uploads.attempted(),
                file.display(),
                reason,
                outcome.uploads.skipped.len()
            ),
        }
    }

    match &outcome.link {
        DriveLink::Folder(url) | DriveLink::File(url) => println!("  Drive:  {url}"),
        DriveLink::NotUploaded => println!(
            "  Drive:  not uploaded; check the storage integration with 'invoice-cli status'"
        ),
    }

    Ok(())
}

/// Print description suggestions for a line-item group
fn cmd_suggest(cfg_dir: &Path, group: &str) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let options = FormOptions::resolve(&settings.options);

    let today = Local::now().date_naive();
    let suggestions = suggestions_for(&options.suggestions, group, today);

    if suggestions.is_empty() {
        println!("No suggestions for group '{group}'.");
    } else {
        for suggestion in suggestions {
            println!("{suggestion}");
        }
    }

    Ok(())
}

/// Show the configured authoring pick lists
fn cmd_options(cfg_dir: &Path) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let options = FormOptions::resolve(&settings.options);

    println!("Units:  {}", join_or_dash(&options.units));
    println!("Rates:  {}", join_or_dash(&options.rates));
    println!("Groups: {}", join_or_dash(&options.group_names));

    if !options.suggestions.is_empty() {
        println!();
        println!("Description suggestions:");
        let mut groups: Vec<_> = options.suggestions.keys().collect();
        groups.sort();
        for group in groups {
            let list = &options.suggestions[group];
            if list.is_empty() {
                println!("  {group}: (previous month)");
            } else {
                println!("  {group}: {}", list.join(", "));
            }
        }
    }

    Ok(())
}

fn join_or_dash(list: &[String]) -> String {
    if list.is_empty() {
        "-".to_string()
    } else {
        list.join(", ")
    }
}

/// Print the next invoice number
fn cmd_next_number(cfg_dir: &Path) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let today = Local::now().date_naive();
    println!("{}", advisory_or_fallback(&api, today));

    Ok(())
}

/// List clients
fn cmd_parties(cfg_dir: &Path) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let parties = api.list_parties()?;

    if parties.is_empty() {
        println!("No clients yet. Add one with 'invoice-cli add-party'.");
        return Ok(());
    }

    let rows: Vec<PartyRow> = parties
        .iter()
        .map(|party| PartyRow {
            id: party.id,
            company: party.company_name.clone(),
            contact: dash(&party.contact_person),
            city: dash(&party.city),
            vat: dash(&party.vat_number),
            terms: dash(&party.payment_term),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

/// Add a client
fn cmd_add_party(cfg_dir: &Path, payload: PartyPayload) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let created = api.create_party(&payload)?;
    println!("Added client '{}' (id {})", created.company_name, created.id);

    Ok(())
}

/// Edit a client
#[allow(clippy::too_many_arguments)]
fn cmd_edit_party(
    cfg_dir: &Path,
    id: i64,
    company_name: Option<String>,
    contact_person: Option<String>,
    address: Option<String>,
    city: Option<String>,
    vat_number: Option<String>,
    payment_term: Option<String>,
) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let parties = api.list_parties()?;
    let party = parties
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| InvoiceError::PartyNotFound(id.to_string()))?;

    // Full-record replace: start from the current record, apply the given
    // fields, and PUT the whole thing back.
    let mut payload = party.payload();
    if let Some(v) = company_name {
        payload.company_name = v;
    }
    if let Some(v) = contact_person {
        payload.contact_person = Some(v);
    }
    if let Some(v) = address {
        payload.address = Some(v);
    }
    if let Some(v) = city {
        payload.city = Some(v);
    }
    if let Some(v) = vat_number {
        payload.vat_number = Some(v);
    }
    if let Some(v) = payment_term {
        payload.payment_term = Some(v);
    }

    let updated = api.update_party(id, &payload)?;
    api.list_parties()?;

    println!("Updated client '{}'", updated.company_name);

    Ok(())
}

/// Delete a client
fn cmd_remove_party(cfg_dir: &Path, id: i64, yes: bool) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let parties = api.list_parties()?;
    let party = parties
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| InvoiceError::PartyNotFound(id.to_string()))?;

    let prompt = format!(
        "Delete client '{}'? This cannot be undone.",
        party.company_name
    );
    if !confirm_deletion(&prompt, yes)? {
        println!("Aborted.");
        return Ok(());
    }

    api.delete_party(id)?;
    let remaining = api.list_parties()?;

    println!(
        "Deleted client '{}'. {} client(s) remain.",
        party.company_name,
        remaining.len()
    );

    Ok(())
}

/// List invoices
fn cmd_list(cfg_dir: &Path, limit: Option<usize>) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let invoices = api.list_invoices()?;

    if invoices.is_empty() {
        println!("No invoices yet. Create your first invoice with 'invoice-cli new'.");
        return Ok(());
    }

    // Newest first
    let shown: Vec<_> = invoices.iter().rev().collect();
    let shown = match limit {
        Some(n) => &shown[..n.min(shown.len())],
        None => &shown[..],
    };

    let rows: Vec<InvoiceRow> = shown
        .iter()
        .map(|inv| InvoiceRow {
            id: inv.id,
            number: inv.invoice_number.clone(),
            date: inv.date.to_string(),
            client: inv.party.company_name.clone(),
            total: money(&settings, inv.total()),
            terms: inv.payment_term.clone(),
            drive: if inv.drive_folder_id.is_some() {
                "folder".to_string()
            } else if inv.drive_file_url.is_some() {
                "file".to_string()
            } else {
                "-".to_string()
            },
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    println!();
    println!("Total: {} invoices", invoices.len());
    println!("Use the id with show/remove/upload (e.g., 'invoice-cli show 1')");

    Ok(())
}

/// Show one invoice
fn cmd_show(cfg_dir: &Path, id: i64) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let invoice = api.get_invoice(id)?;

    println!("Invoice {} (id {})", invoice.invoice_number, invoice.id);
    println!("  Client: {}", invoice.party.company_name);
    println!("  Date:   {}", invoice.date);
    println!("  Terms:  {}", invoice.payment_term);

    let rows: Vec<LineItemRow> = invoice
        .line_items
        .iter()
        .map(|item| LineItemRow {
            group: match &item.group_name {
                Some(g) => g.clone(),
                None => "-".to_string(),
            },
            description: item.description.clone(),
            rate: format_amount(item.rate),
            qty: item.quantity.to_string(),
            unit: item.unit.clone(),
            amount: money(&settings, item.amount()),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    println!("  Total:  {}", money(&settings, invoice.total()));

    match (invoice.folder_url(), &invoice.drive_file_url) {
        (Some(folder), _) => println!("  Folder: {folder}"),
        (None, Some(file)) => println!("  File:   {file}"),
        (None, None) => println!("  Drive:  not uploaded"),
    }

    Ok(())
}

/// Delete an invoice
fn cmd_remove(cfg_dir: &Path, id: i64, yes: bool) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let invoice = api.get_invoice(id)?;

    let prompt = format!(
        "Delete invoice #{}? This cannot be undone.",
        invoice.invoice_number
    );
    if !confirm_deletion(&prompt, yes)? {
        println!("Aborted.");
        return Ok(());
    }

    api.delete_invoice(id)?;
    let remaining = api.list_invoices()?;

    println!(
        "Deleted invoice {}. {} invoice(s) remain.",
        invoice.invoice_number,
        remaining.len()
    );

    Ok(())
}

/// Attach more files to an existing invoice
fn cmd_upload(cfg_dir: &Path, id: i64, files: &[PathBuf]) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    for file in files {
        if !file.exists() {
            return Err(InvoiceError::AttachmentNotFound(file.clone()));
        }
    }

    let invoice = api.get_invoice(id)?;

    // Unlike mid-submit uploads, a failure here stops the command: the
    // already-uploaded files are printed above the error.
    for file in files {
        let uploaded = api.upload_invoice_file(invoice.id, file)?;
        println!("Uploaded {}", uploaded.filename);
    }

    let invoice = api.get_invoice(id)?;
    match (invoice.folder_url(), &invoice.drive_file_url) {
        (Some(folder), _) => println!("Folder: {folder}"),
        (None, Some(file)) => println!("File:   {file}"),
        (None, None) => println!("Drive:  not uploaded"),
    }

    Ok(())
}

/// Show the company profile
fn cmd_profile(cfg_dir: &Path) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let profile = api.get_profile()?;

    println!("Company Profile");
    println!("{}", "-".repeat(50));
    println!("Brand name: {}", profile.brand_name);
    println!("Legal name: {}", profile.legal_name);
    println!("SIRET:      {}", dash(&profile.siret));
    println!("Phone:      {}", dash(&profile.phone));
    println!("Email:      {}", dash(&profile.email));
    println!("Address:    {}", dash(&profile.address));
    println!("IBAN:       {}", dash(&profile.iban));
    println!("BIC:        {}", dash(&profile.bic));
    println!("VAT note:   {}", profile.vat_note);

    Ok(())
}

/// Update company profile fields
#[allow(clippy::too_many_arguments)]
fn cmd_edit_profile(
    cfg_dir: &Path,
    brand_name: Option<String>,
    legal_name: Option<String>,
    siret: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    iban: Option<String>,
    bic: Option<String>,
    vat_note: Option<String>,
) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    let mut profile: CompanyProfile = api.get_profile()?;
    if let Some(v) = brand_name {
        profile.brand_name = v;
    }
    if let Some(v) = legal_name {
        profile.legal_name = v;
    }
    if let Some(v) = siret {
        profile.siret = Some(v);
    }
    if let Some(v) = phone {
        profile.phone = Some(v);
    }
    if let Some(v) = email {
        profile.email = Some(v);
    }
    if let Some(v) = address {
        profile.address = Some(v);
    }
    if let Some(v) = iban {
        profile.iban = Some(v);
    }
    if let Some(v) = bic {
        profile.bic = Some(v);
    }
    if let Some(v) = vat_note {
        profile.vat_note = v;
    }

    api.update_profile(&profile)?;
    println!("Settings saved.");

    Ok(())
}

/// Show backend and storage-integration health
fn cmd_status(cfg_dir: &Path) -> Result<()> {
    let settings = settings_checked(cfg_dir)?;
    let api = api_client(&settings)?;

    println!("Invoicing Status");
    println!("{}", "-".repeat(50));
    println!("Backend:      {}", settings.base_url());

    let drive = api.drive_status().unwrap_or_else(|e| {
        log::warn!("drive status check failed: {e}");
        DriveStatus {
            status: "error".to_string(),
            message: "Could not connect to backend".to_string(),
        }
    });
    println!("Drive:        {} ({})", drive.status, drive.message);

    match api.list_parties() {
        Ok(parties) => println!("Clients:      {}", parties.len()),
        Err(e) => {
            log::warn!("party list unavailable: {e}");
            println!("Clients:      unavailable");
        }
    }
    match api.list_invoices() {
        Ok(invoices) => println!("Invoices:     {}", invoices.len()),
        Err(e) => {
            log::warn!("invoice list unavailable: {e}");
            println!("Invoices:     unavailable");
        }
    }

    let today = Local::now().date_naive();
    println!("Next invoice: {}", advisory_or_fallback(&api, today));

    Ok(())
}
