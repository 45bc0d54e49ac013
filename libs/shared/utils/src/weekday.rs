use chrono::Weekday;
use shared_models::ScheduleDay;

/// Short display label, total over all seven symbols.
pub fn short_label(day: ScheduleDay) -> &'static str {
    match day {
        ScheduleDay::Mon => "Пн",
        ScheduleDay::Tue => "Вт",
        ScheduleDay::Wed => "Ср",
        ScheduleDay::Thu => "Чт",
        ScheduleDay::Fri => "Пт",
        ScheduleDay::Sat => "Сб",
        ScheduleDay::Sun => "Вс",
    }
}

/// Full display label.
pub fn long_label(day: ScheduleDay) -> &'static str {
    match day {
        ScheduleDay::Mon => "Понедельник",
        ScheduleDay::Tue => "Вторник",
        ScheduleDay::Wed => "Среда",
        ScheduleDay::Thu => "Четверг",
        ScheduleDay::Fri => "Пятница",
        ScheduleDay::Sat => "Суббота",
        ScheduleDay::Sun => "Воскресенье",
    }
}

pub fn from_weekday(weekday: Weekday) -> ScheduleDay {
    ScheduleDay::from(weekday)
}
