use e2e::browser::{Browser, Page};
use e2e::test_server::TestServer;

const VISIBLE_STATE: &str = r#"JSON.stringify({
    lang: document.documentElement.lang,
    title: document.title,
    nav: document.querySelector('#main-nav').getAttribute('aria-label'),
    blocks: Array.from(document.querySelectorAll('[data-lang]'))
        .map(function (el) { return el.getAttribute('data-lang') + ':' + el.hidden; }),
    radios: Array.from(document.querySelectorAll("input[name='language']"))
        .map(function (el) { return el.value + ':' + el.checked; })
})"#;

fn assert_shows(page: &Page, lang: &str, other: &str) {
    assert_eq!(
        page.eval_string("document.documentElement.lang").unwrap().as_deref(),
        Some(lang)
    );
    assert!(page
        .eval_bool(&format!(
            "Array.from(document.querySelectorAll('[data-lang=\"{lang}\"]')).every(function (el) {{ return !el.hidden; }})"
        ))
        .unwrap());
    assert!(page
        .eval_bool(&format!(
            "Array.from(document.querySelectorAll('[data-lang=\"{other}\"]')).every(function (el) {{ return el.hidden; }})"
        ))
        .unwrap());
    assert!(page
        .eval_bool(&format!(
            "document.querySelector(\"input[name='language'][value='{lang}']\").checked"
        ))
        .unwrap());
}

#[tokio::test]
#[ignore = "needs Chrome and a bundled web client"]
async fn defaults_to_french() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");
    page.open(server.url()).expect("open");

    assert_shows(&page, "fr", "en");
    assert_eq!(
        page.attribute("#main-nav", "aria-label").unwrap().as_deref(),
        Some("Navigation principale")
    );
}

#[tokio::test]
#[ignore = "needs Chrome and a bundled web client"]
async fn url_parameter_wins_and_is_persisted() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");

    page.open(&server.page("/?lang=en")).expect("open");
    page.wait_until("document.documentElement.lang === 'en'").unwrap();
    assert_shows(&page, "en", "fr");
    assert_eq!(
        page.attribute("#main-nav", "aria-label").unwrap().as_deref(),
        Some("Main navigation")
    );
    page.wait_until("localStorage.getItem('orig_lang') === 'en'")
        .expect("choice persisted");

    // Without the parameter the stored value applies.
    page.open(server.url()).expect("reopen");
    page.wait_until("document.documentElement.lang === 'en'").unwrap();

    // And the parameter still overrides storage.
    page.open(&server.page("/?lang=fr")).expect("reopen with fr");
    page.wait_until("document.documentElement.lang === 'fr'").unwrap();
    assert_shows(&page, "fr", "en");
}

#[tokio::test]
#[ignore = "needs Chrome and a bundled web client"]
async fn invalid_parameter_falls_back_silently() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");

    page.open(&server.page("/?lang=de")).expect("open");
    assert_shows(&page, "fr", "en");
}

#[tokio::test]
#[ignore = "needs Chrome and a bundled web client"]
async fn selecting_the_same_language_twice_changes_nothing() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");
    page.open(server.url()).expect("open");

    page.click("input[name='language'][value='en']").unwrap();
    page.wait_until("document.documentElement.lang === 'en'").unwrap();
    let first = page.eval_string(VISIBLE_STATE).unwrap();

    page.click("input[name='language'][value='en']").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(300));
    let second = page.eval_string(VISIBLE_STATE).unwrap();

    assert_eq!(first, second);
    assert_shows(&page, "en", "fr");
}

#[tokio::test]
#[ignore = "needs Chrome and a bundled web client"]
async fn malformed_radio_value_is_ignored() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");
    page.open(server.url()).expect("open");

    page.eval("document.querySelector(\"input[name='language'][value='en']\").value = 'xx'")
        .unwrap();
    page.click("input[name='language'][value='xx']").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(300));

    assert_eq!(
        page.eval_string("document.documentElement.lang").unwrap().as_deref(),
        Some("fr")
    );
    assert_eq!(page.eval_string("localStorage.getItem('orig_lang')").unwrap().as_deref(), Some("fr"));
}
