pub mod api {
    pub const BASE_URL: &str = "https://codeforces.com/api";
    pub const PROBLEMSET: &str = "problemset.problems";
    pub const CONTEST_LIST: &str = "contest.list";
    pub const USER_STATUS: &str = "user.status";
}
pub mod rate {
    use std::time::Duration;
    pub const REQUEST_DELAY: Duration = Duration::from_millis(500);
}
pub mod export {
    pub const LINK_TEMPLATE: &str = "https://codeforces.com/contest/{{contest}}/problem/{{index}}";
    pub const RATING_SHEET: &str = "Rating {{rating}}";
    pub const DIVISION_SHEET: &str = "Div {{division}}";
    pub const UNSOLVED_OUTPUT: &str = "unsolved_problems.xlsx";
    pub const DIVISION_OUTPUT: &str = "problems_by_div.xlsx";
    pub const SHEET_NAME_MAX: usize = 31;
}
