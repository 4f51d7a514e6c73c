use quartz_cron::{
    classify, synthesize, validate, AdvancedSchedule, CronOptions, DailySchedule, HourlySchedule,
    Meridiem, MinutesSchedule, MonthDay, MonthlySchedule, Occurrence, Schedule, TimeOfDay,
    Weekday, WeeklySchedule, YearlySchedule,
};

fn all_options() -> Vec<CronOptions> {
    let mut combos = Vec::new();
    for remove_seconds in [false, true] {
        for remove_years in [false, true] {
            for use_24_hour_time in [true, false] {
                combos.push(
                    CronOptions {
                        remove_seconds,
                        remove_years,
                        use_24_hour_time,
                        ..CronOptions::default()
                    }
                    .normalized(),
                );
            }
        }
    }
    combos
}

/// A time of day as the editor would show it for `hour24`
fn at(hour24: u8, minutes: u8, seconds: u8, options: &CronOptions) -> TimeOfDay {
    let seconds = if options.remove_seconds { 0 } else { seconds };
    TimeOfDay::from_cron(hour24, minutes, seconds, options.use_24_hour_time)
}

fn secs(seconds: u8, options: &CronOptions) -> u8 {
    if options.remove_seconds {
        0
    } else {
        seconds
    }
}

fn sample_schedules(options: &CronOptions) -> Vec<Schedule> {
    vec![
        Schedule::Minutes(MinutesSchedule {
            every_minutes: 5,
            seconds: secs(30, options),
        }),
        Schedule::Hourly(HourlySchedule {
            every_hours: 2,
            minutes: 15,
            seconds: secs(10, options),
        }),
        Schedule::Daily(DailySchedule::EveryNDays {
            every_days: 3,
            time: at(0, 5, 0, options),
        }),
        Schedule::Daily(DailySchedule::EveryWeekday {
            time: at(14, 30, 45, options),
        }),
        Schedule::Weekly(WeeklySchedule {
            days: [Weekday::Sun, Weekday::Mon, Weekday::Wed].into(),
            time: at(12, 0, 0, options),
        }),
        Schedule::Weekly(WeeklySchedule {
            days: Weekday::ALL.into(),
            time: at(23, 59, 59, options),
        }),
        Schedule::Monthly(MonthlySchedule::SpecificDayOfMonth {
            day: MonthDay::Day(15),
            run_on_weekday: true,
            every_months: 1,
            time: at(10, 0, 0, options),
        }),
        Schedule::Monthly(MonthlySchedule::SpecificDayOfMonth {
            day: MonthDay::Last,
            run_on_weekday: false,
            every_months: 6,
            time: at(18, 20, 0, options),
        }),
        Schedule::Monthly(MonthlySchedule::SpecificWeekdayOccurrence {
            weekday: Weekday::Thu,
            occurrence: Occurrence::Second,
            start_month: 3,
            every_months: 2,
            time: at(7, 45, 0, options),
        }),
        Schedule::Yearly(YearlySchedule::SpecificMonthDay {
            month: 2,
            day: MonthDay::Day(29),
            run_on_weekday: false,
            time: at(1, 1, 1, options),
        }),
        Schedule::Yearly(YearlySchedule::SpecificMonthDay {
            month: 12,
            day: MonthDay::Last,
            run_on_weekday: true,
            time: at(12, 30, 0, options),
        }),
        Schedule::Yearly(YearlySchedule::SpecificMonthWeek {
            month: 11,
            weekday: Weekday::Thu,
            occurrence: Occurrence::Fourth,
            time: at(11, 0, 0, options),
        }),
        Schedule::Yearly(YearlySchedule::SpecificMonthWeek {
            month: 5,
            weekday: Weekday::Mon,
            occurrence: Occurrence::Last,
            time: at(13, 0, 0, options),
        }),
    ]
}

#[test]
fn generated_expressions_classify_back_for_every_option_combination() {
    for options in all_options() {
        for schedule in sample_schedules(&options) {
            let cron = synthesize(&schedule, &options);
            assert_eq!(
                classify(&cron, &options),
                schedule,
                "round trip failed for {:?} via {:?} with {:?}",
                schedule,
                cron,
                options
            );
        }
    }
}

#[test]
fn generated_expressions_are_grammatical() {
    for options in all_options() {
        for schedule in sample_schedules(&options) {
            let cron = synthesize(&schedule, &options);
            let full = options.with_seconds_field(&cron);
            assert!(validate(&full), "generated invalid expression {:?}", full);
            assert_eq!(
                cron.split(' ').count(),
                options.expected_field_count(),
                "unexpected field count in {:?}",
                cron
            );
        }
    }
}

#[test]
fn advanced_text_round_trips() {
    let options = CronOptions::default();
    let schedule = Schedule::Advanced(AdvancedSchedule {
        expression: "0 0/10 9-17 ? * MON-FRI *".to_string(),
    });
    let cron = synthesize(&schedule, &options);
    assert_eq!(classify(&cron, &options), schedule);
}

#[test]
fn twelve_hour_midnight_and_noon() {
    let options = CronOptions {
        use_24_hour_time: false,
        ..CronOptions::default()
    };
    let Schedule::Daily(DailySchedule::EveryNDays { time, .. }) =
        classify("0 0 0 1/1 * ? *", &options)
    else {
        panic!("expected daily schedule");
    };
    assert_eq!((time.hours, time.meridiem), (12, Some(Meridiem::Am)));

    let Schedule::Daily(DailySchedule::EveryNDays { time, .. }) =
        classify("0 0 12 1/1 * ? *", &options)
    else {
        panic!("expected daily schedule");
    };
    assert_eq!((time.hours, time.meridiem), (12, Some(Meridiem::Pm)));
}

#[test]
fn out_of_range_clock_fields_stay_advanced() {
    let expressions = [
        "0 0 24 1/1 * ? *",
        "0 0 250 ? * MON-FRI *",
        "0 0 255 ? * MON,WED *",
        "0 60 9 ? * MON *",
        "0 99 12 ? 1/2 FRI#2 *",
        "60 0/5 * 1/1 * ? *",
        "0 75 0/2 1/1 * ? *",
        "0 0 30 15W 1/1 ? *",
        "59 59 200 ? 11 THUL *",
    ];
    for use_24_hour_time in [true, false] {
        let options = CronOptions {
            use_24_hour_time,
            ..CronOptions::default()
        };
        for cron in expressions {
            assert_eq!(
                classify(cron, &options),
                Schedule::Advanced(AdvancedSchedule {
                    expression: cron.to_string(),
                }),
                "{} with 24-hour time {}",
                cron,
                use_24_hour_time
            );
        }
    }
}
