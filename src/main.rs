use chrono::NaiveDate;
use std::error::Error;

use tournament_organizer::application::{OrganizerService, TracingEventPublisher};
use tournament_organizer::config::AppConfig;
use tournament_organizer::domain::common::{Address, PersonalInfo};
use tournament_organizer::domain::team::{Manager, Team};
use tournament_organizer::infrastructure::repositories::InMemoryOrganizerRepository;

fn person(name: &str, surname: &str, email: &str) -> Result<PersonalInfo, Box<dyn Error>> {
    let birth_date = NaiveDate::from_ymd_opt(1990, 1, 1).ok_or("invalid birth date")?;
    Ok(PersonalInfo::new(name, surname, email, birth_date, Address::default())?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    tracing::info!(pairing = %config.pairing, "Configuration loaded");

    let service = OrganizerService::new(InMemoryOrganizerRepository::new(), TracingEventPublisher);

    let organizer_id = service
        .create_organizer(Some(person("Morgan", "Reyes", "morgan@example.com")?))
        .await?;
    service
        .create_tournament(organizer_id, Some("Autumn Cup".to_string()))
        .await?;

    let teams = [
        ("Red Foxes", "Ash"),
        ("Blue Herons", "Rowan"),
        ("Grey Wolves", "Sky"),
        ("Gold Hawks", "Quinn"),
    ];
    for (team_name, manager) in teams {
        let manager = Manager::create(person(manager, "Manager", "manager@example.com")?);
        service
            .register_team(organizer_id, Team::create(team_name, manager)?)
            .await?;
    }

    let match_maker = config.pairing.build();
    let matches = service
        .get_tournament_matches(organizer_id, &*match_maker)
        .await?;
    for m in &matches {
        tracing::info!(
            round = m.round(),
            home = %m.home_team_id(),
            away = %m.away_team_id(),
            "Match"
        );
    }

    let released = service.finish_tournament(organizer_id).await?;
    tracing::info!(teams = released.len(), "Done");

    Ok(())
}
