use quartz_cron::{
    month_day_label, CronEditor, CronOptions, MonthlySchedule, Occurrence, Schedule, Weekday,
};
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .with_target(false)
        .init();

    let options = CronOptions {
        use_24_hour_time: false,
        default_time: "09:30:00".to_string(),
        ..CronOptions::default()
    };

    let mut editor = CronEditor::new(options, Some("0 30 14 ? * MON-FRI *"))?;
    println!("Seeded as: {} -> {:?}", editor.kind(), editor.schedule());

    // The host writes every emitted expression back, as a form binding would
    let emitted = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = emitted.clone();
    editor.subscribe(move |cron: &str| {
        println!("  -> emitted: {}", cron);
        sink.borrow_mut().push(cron.to_string());
    });

    for tab in ["minutes", "hourly", "weekly", "yearly", "monthly/specificWeekDay"] {
        editor.select_tab(tab)?;
        println!("[{}] {}", tab, editor.cron());
        let echoed = emitted.borrow_mut().pop();
        if let Some(cron) = echoed {
            editor.set_cron(&cron);
        }
    }

    editor.edit(|schedule| {
        if let Schedule::Monthly(MonthlySchedule::SpecificWeekdayOccurrence {
            weekday,
            occurrence,
            ..
        }) = schedule
        {
            *weekday = Weekday::Fri;
            *occurrence = Occurrence::Last;
        }
    });
    println!("Edited: {}", editor.cron());
    let echoed = emitted.borrow_mut().pop();
    if let Some(cron) = echoed {
        editor.set_cron(&cron);
    }

    // An expression from outside that matches no template
    editor.set_cron("0 15 10 L-2 * ? 2019");
    println!("External: {} (valid: {})", editor.kind(), editor.is_valid());

    editor.set_cron("0 15 10 L-2 * ?");
    println!("Rejected: {}", editor.validation().error_message);

    println!("Label for LW: {}", month_day_label("LW"));
    Ok(())
}
