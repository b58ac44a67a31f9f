use study_buddy_app::*;

use database::SqliteStore;

const SAMPLE_TOPIC: &str = "Photosynthesis";
const SAMPLE_NOTES: &str = "Photosynthesis converts light energy into chemical energy. \
Plants use chlorophyll to capture sunlight. \
The Calvin Cycle fixes carbon dioxide into sugars inside the chloroplast stroma. \
Oxygen is released as a by-product when water molecules are split.";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let store = SqliteStore::open(&config.database_path)?;
    let mut app = StudyApp::new(store, &config);

    if app.saved_topics().is_empty() {
        app.session_mut().topic_name = SAMPLE_TOPIC.to_string();
        app.session_mut().notes = SAMPLE_NOTES.to_string();
        app.generate()?;

        println!("Sample topic created!");
    }

    println!("Loaded {} topics from database", app.saved_topics().len());
    for summary in app.saved_summaries() {
        println!("  - {}", summary);
    }

    Ok(())
}
