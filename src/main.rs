use anyhow::Context;
use clap::Parser;
use relief_ops::core::matcher;
use relief_ops::utils::{logger, validation::Validate};
use relief_ops::{
    load_registration_queue, CliArgs, CsvVolunteerFile, DeploymentEngine, OpsError,
    RegistrantStore, SiteStore, SiteTableFile, SkillCounter, StoreConfig, Volunteer,
    VolunteerQueue,
};
use std::io::{self, BufRead, Write};

type LineSource = dyn Iterator<Item = io::Result<String>>;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    let config = match &args.config {
        Some(path) => StoreConfig::from_toml_file(path)
            .with_context(|| format!("loading store config from {path}"))?,
        None => StoreConfig::default().with_data_dir(args.data_dir.clone()),
    };
    config.validate().context("invalid store configuration")?;

    let registrants = CsvVolunteerFile::new(config.volunteers_path());
    let ledger = CsvVolunteerFile::new(config.deployed_path());
    let site_table = SiteTableFile::new(config.sites_path());

    tracing::info!("Starting relief-ops operator shell");
    println!("=== DISASTER RELIEF VOLUNTEER OPERATIONS ===\n");

    let load = load_registration_queue(&registrants, &ledger)?;
    if load.loaded > 0 {
        println!("Loaded {} volunteers from file.", load.loaded);
    }
    if load.skipped_deployed > 0 {
        println!("Skipped {} already deployed volunteers.", load.skipped_deployed);
    }
    let mut queue = load.queue;

    let engine = DeploymentEngine::new(ledger, site_table.clone());

    let stdin = io::stdin();
    let mut lines: Box<LineSource> = Box::new(stdin.lock().lines());

    loop {
        println!("\n=== VOLUNTEER OPERATIONS MENU ===");
        println!("1. Register Volunteer");
        println!("2. Deploy Volunteer to Field");
        println!("3. View Available Volunteers");
        println!("4. Exit");

        let Some(choice) = prompt(&mut lines, "Enter your choice (1-4): ")? else {
            break;
        };

        match choice.trim() {
            "1" => register_volunteers(&mut lines, &mut queue, &registrants)?,
            "2" => deploy_volunteer(&engine, &site_table, &mut queue)?,
            "3" => view_volunteers(&queue, &registrants)?,
            "4" => break,
            other => println!("Invalid choice '{other}'. Please enter a number between 1 and 4."),
        }
    }

    println!("Exiting volunteer operations.");
    Ok(())
}

/// Prints `message`, reads one line. `None` means stdin is exhausted.
fn prompt(lines: &mut Box<LineSource>, message: &str) -> anyhow::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn register_volunteers(
    lines: &mut Box<LineSource>,
    queue: &mut VolunteerQueue,
    registrants: &CsvVolunteerFile,
) -> anyhow::Result<()> {
    println!("\n=== VOLUNTEER REGISTRATION ===");
    let Some(count) = prompt(lines, "How many volunteers would you like to register? ")? else {
        return Ok(());
    };
    let count: usize = match count.trim().parse() {
        Ok(n) if n > 0 => n,
        _ => {
            println!("Error: number of volunteers must be a positive number.");
            return Ok(());
        }
    };

    let mut registered = 0;
    for i in 1..=count {
        if count > 1 {
            println!("\n--- Volunteer {i} of {count} (type 'skip' to skip) ---");
        }
        match read_volunteer(lines)? {
            Entry::Volunteer(volunteer) => {
                queue.enqueue(volunteer.clone());
                registrants.append(&volunteer)?;
                println!("Registered: {} ({})", volunteer.name, volunteer.skill);
                registered += 1;
            }
            Entry::Skipped => println!("Skipped volunteer {i}."),
            Entry::EndOfInput => break,
        }
    }

    if registered > 0 {
        println!("\n{registered} volunteer(s) registered. Queue size: {}", queue.len());
    }
    Ok(())
}

enum Entry {
    Volunteer(Volunteer),
    Skipped,
    EndOfInput,
}

fn read_volunteer(lines: &mut Box<LineSource>) -> anyhow::Result<Entry> {
    let mut fields = Vec::with_capacity(3);
    for label in ["name", "contact", "skill/specialization"] {
        let Some(value) = prompt(lines, &format!("Enter volunteer {label}: "))? else {
            return Ok(Entry::EndOfInput);
        };
        if value.trim() == "skip" {
            return Ok(Entry::Skipped);
        }
        fields.push(value);
    }

    match Volunteer::new(&fields[0], &fields[1], &fields[2]) {
        Ok(volunteer) => Ok(Entry::Volunteer(volunteer)),
        Err(e) => {
            println!("Error: {e}. Entry discarded.");
            Ok(Entry::Skipped)
        }
    }
}

fn deploy_volunteer(
    engine: &DeploymentEngine<CsvVolunteerFile, SiteTableFile>,
    site_table: &SiteTableFile,
    queue: &mut VolunteerQueue,
) -> anyhow::Result<()> {
    println!("\n=== VOLUNTEER DEPLOYMENT ===");
    println!("Current volunteers in queue: {}", queue.len());

    let survey = matcher::capacity_survey(&site_table.load()?);
    if !survey.is_empty() {
        println!("\n{:<20}{:<12}{:<12}{:<10}", "Site Name", "Current/Max", "% Filled", "Priority");
        println!("{}", "-".repeat(54));
        for status in &survey {
            let (filled, priority) = match status.fill_ratio {
                Some(ratio) => {
                    let tag = if status.highest_priority { "HIGHEST" } else { "Lower" };
                    (format!("{:.0}%", ratio * 100.0), tag)
                }
                None => ("100%".to_string(), "FULL"),
            };
            println!(
                "{:<20}{:<12}{:<12}{:<10}",
                status.name,
                format!("{}/{}", status.current_count, status.max_capacity),
                filled,
                priority
            );
        }
        println!("{}", "-".repeat(54));
    }

    match engine.deploy_next(queue) {
        Ok(deployment) => {
            println!("\n*** DEPLOYMENT SUCCESSFUL ***");
            println!(
                "Deployed {} ({}) to {}",
                deployment.volunteer.name, deployment.volunteer.skill, deployment.site_name
            );
            println!(
                "Site capacity: {}/{} -> {}/{}",
                deployment.previous_count,
                deployment.max_capacity,
                deployment.new_count,
                deployment.max_capacity
            );
            println!("Remaining volunteers in queue: {}", queue.len());
        }
        Err(OpsError::NoVolunteers) => {
            println!("\nDeployment cannot proceed: no volunteers in queue.");
            println!("Register volunteers first using menu option 1.");
        }
        Err(OpsError::NoCapacity) => {
            println!("\nDeployment cannot proceed: all relief sites are at capacity.");
            println!("All {} volunteers remain in queue (FIFO order kept).", queue.len());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn view_volunteers(queue: &VolunteerQueue, registrants: &CsvVolunteerFile) -> anyhow::Result<()> {
    if queue.is_empty() {
        println!("\nNo volunteers currently awaiting deployment.");
    } else {
        println!("\n=== REGISTERED VOLUNTEERS (FIFO Order) ===");
        println!("{:<5}{:<20}{:<25}{:<20}", "Pos", "Name", "Contact", "Skill");
        println!("{}", "-".repeat(70));
        for (position, volunteer) in queue.iter().enumerate() {
            println!(
                "{:<5}{:<20}{:<25}{:<20}",
                position + 1,
                volunteer.name,
                volunteer.contact,
                volunteer.skill
            );
        }
        println!("{}", "-".repeat(70));
        println!("Total volunteers in queue: {}", queue.len());
    }

    let history = registrants.load()?;
    if history.is_empty() {
        return Ok(());
    }

    println!("\n=== SKILL DISTRIBUTION (All Registered) ===");
    let skills = SkillCounter::tally(&history);
    println!("{:<25}{:<10}", "Skill", "Count");
    println!("{}", "-".repeat(35));
    for entry in skills.iter() {
        println!("{:<25}{:<10}", entry.skill, entry.count);
    }
    println!("{}", "-".repeat(35));
    println!("Total registered volunteers: {}", history.len());
    Ok(())
}
