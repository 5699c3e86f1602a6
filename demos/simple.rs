use tradecal::{get_calendar, ymd, TradingCalendar};

fn main() {
    let cal = get_calendar("NASDAQ").expect("NASDAQ is a known code");
    let sessions = cal.sessions_in_range(ymd(2021, 12, 20), ymd(2022, 1, 7));
    println!("{:?}", sessions);
}
