use fund_tracker_wasm::application::SearchFundsUseCase;
use fund_tracker_wasm::domain::{
    errors::{ApiError, ApiErrorKind},
    funds::{MutualFund, SchemeCode},
    ports::FundSearchPort,
    search::{SEARCH_ERROR_FALLBACK, SearchState},
};
use futures::executor::block_on;
use futures::future::{FutureExt, LocalBoxFuture};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::cell::RefCell;
use std::rc::Rc;

struct FakeFunds {
    calls: RefCell<Vec<String>>,
    result: Result<Vec<MutualFund>, ApiError>,
}

impl FakeFunds {
    fn returning(result: Result<Vec<MutualFund>, ApiError>) -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            result,
        })
    }
}

impl FundSearchPort for FakeFunds {
    fn search_funds<'a>(&'a self, query: &'a str) -> LocalBoxFuture<'a, Result<Vec<MutualFund>, ApiError>> {
        self.calls.borrow_mut().push(query.to_string());
        let result = self.result.clone();
        async move { result }.boxed_local()
    }
}

fn fund(code: u64, name: &str) -> MutualFund {
    MutualFund::new(SchemeCode::from(code), name)
}

fn run(repo: &Rc<FakeFunds>, query: &str) -> (bool, Vec<SearchState>) {
    let use_case = SearchFundsUseCase::new(Rc::clone(repo));
    let mut states = Vec::new();
    let searched = block_on(use_case.execute(query, |s| states.push(s)));
    (searched, states)
}

#[test]
fn success_goes_through_loading_to_results() {
    let repo = FakeFunds::returning(Ok(vec![
        fund(119551, "Axis Bluechip Fund"),
        fund(120503, "Axis Midcap Fund"),
    ]));

    let (searched, states) = run(&repo, "Axis");

    assert!(searched);
    assert_eq!(*repo.calls.borrow(), vec!["Axis".to_string()]);
    assert_eq!(states.len(), 2);
    assert!(states[0].is_loading());
    assert!(states[0].has_searched());
    assert_eq!(states[0].error(), None);

    let done = &states[1];
    assert!(!done.is_loading());
    assert_eq!(done.result_count(), 2);
    let keys: Vec<&str> = done.funds().iter().map(|f| f.key().value()).collect();
    assert_eq!(keys, vec!["119551", "120503"]);
}

#[test]
fn failure_records_message_and_no_results() {
    let repo = FakeFunds::returning(Err(ApiError::new(ApiErrorKind::Server, "Search service unavailable")));

    let (_, states) = run(&repo, "SBI");

    let done = states.last().unwrap();
    assert!(!done.is_loading());
    assert_eq!(done.error(), Some("Search service unavailable"));
    assert!(done.funds().is_empty());
    assert!(!done.is_empty_result());
}

#[test]
fn failure_without_message_uses_fallback() {
    let repo = FakeFunds::returning(Err(ApiError::network("")));
    let (_, states) = run(&repo, "SBI");
    assert_eq!(states.last().unwrap().error(), Some(SEARCH_ERROR_FALLBACK));
}

#[test]
fn empty_list_is_an_empty_result() {
    let repo = FakeFunds::returning(Ok(Vec::new()));
    let (_, states) = run(&repo, "zzzz");
    let done = states.last().unwrap();
    assert!(done.is_empty_result());
    assert!(done.has_searched());
    assert_eq!(done.query(), Some("zzzz"));
}

#[test]
fn blank_query_is_ignored() {
    let repo = FakeFunds::returning(Ok(vec![fund(1, "Any")]));
    let (searched, states) = run(&repo, "   ");
    assert!(!searched);
    assert!(states.is_empty());
    assert!(repo.calls.borrow().is_empty());
}

#[test]
fn clear_and_retry_return_to_idle() {
    let mut state = SearchState::resolve("SBI".into(), Err(ApiError::network("offline")));
    state.retry();
    assert_eq!(state, SearchState::Idle);
    assert!(!state.has_searched());

    let mut state = SearchState::resolve("SBI".into(), Ok(vec![fund(1, "SBI Bluechip")]));
    state.clear();
    assert_eq!(state, SearchState::Idle);
    assert!(state.funds().is_empty());
}

#[test]
fn later_search_replaces_earlier_results() {
    let first = FakeFunds::returning(Ok(vec![fund(1, "HDFC Top 100")]));
    let second = FakeFunds::returning(Err(ApiError::network("offline")));
    let mut current = SearchState::Idle;

    block_on(SearchFundsUseCase::new(Rc::clone(&first)).execute("HDFC", |s| current = s));
    assert_eq!(current.result_count(), 1);

    block_on(SearchFundsUseCase::new(Rc::clone(&second)).execute("HDFC", |s| current = s));
    assert_eq!(current.result_count(), 0);
    assert_eq!(current.error(), Some("offline"));
}

#[quickcheck]
fn any_non_blank_query_is_sent_verbatim_once(query: String) -> TestResult {
    if query.trim().is_empty() {
        return TestResult::discard();
    }
    let repo = FakeFunds::returning(Ok(Vec::new()));
    let (_, states) = run(&repo, &query);

    let loading_then_done = states.len() == 2 && states[0].is_loading() && !states[1].is_loading();
    TestResult::from_bool(*repo.calls.borrow() == vec![query] && loading_then_done)
}
