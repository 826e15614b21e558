use e2e::browser::{Browser, Page};
use e2e::test_server::TestServer;

const BUTTON: &str = ".mobile-menu-button";

fn menu_hidden(page: &Page) -> bool {
    page.eval_bool("document.querySelector('#mobile-menu').hidden").unwrap()
}

fn button_focused(page: &Page) -> bool {
    page.eval_bool("document.activeElement === document.querySelector('.mobile-menu-button')")
        .unwrap()
}

async fn mobile_page() -> (TestServer, Browser, Page) {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch_mobile().expect("browser");
    let page = browser.new_page().expect("page");
    page.open(server.url()).expect("open");
    (server, browser, page)
}

#[tokio::test]
#[ignore = "needs Chrome and a bundled web client"]
async fn toggling_twice_restores_initial_state() {
    let (_server, _browser, page) = mobile_page().await;

    assert_eq!(page.attribute(BUTTON, "aria-expanded").unwrap().as_deref(), Some("false"));
    assert!(menu_hidden(&page));

    page.click(BUTTON).unwrap();
    page.wait_until("document.querySelector('.mobile-menu-button').getAttribute('aria-expanded') === 'true'")
        .unwrap();
    assert!(!menu_hidden(&page));

    page.click(BUTTON).unwrap();
    page.wait_until("document.querySelector('.mobile-menu-button').getAttribute('aria-expanded') === 'false'")
        .unwrap();
    assert!(menu_hidden(&page));
    assert!(button_focused(&page));
}

#[tokio::test]
#[ignore = "needs Chrome and a bundled web client"]
async fn escape_closes_and_returns_focus() {
    let (_server, _browser, page) = mobile_page().await;

    page.click(BUTTON).unwrap();
    page.wait_until("!document.querySelector('#mobile-menu').hidden").unwrap();
    // Move focus away so the focus return is observable.
    page.eval("document.querySelector('#mobile-menu a').focus()").unwrap();

    page.press_key("Escape").unwrap();
    page.wait_until("document.querySelector('#mobile-menu').hidden")
        .expect("escape closes the menu");
    assert_eq!(page.attribute(BUTTON, "aria-expanded").unwrap().as_deref(), Some("false"));
    page.wait_until("document.activeElement === document.querySelector('.mobile-menu-button')")
        .expect("focus back on the button");
}

#[tokio::test]
#[ignore = "needs Chrome and a bundled web client"]
async fn escape_is_ignored_while_closed() {
    let (_server, _browser, page) = mobile_page().await;

    page.click(BUTTON).unwrap();
    page.click(BUTTON).unwrap();
    page.wait_until("document.querySelector('#mobile-menu').hidden").unwrap();
    page.eval("document.querySelector('h1').setAttribute('tabindex', '-1'); document.querySelector('h1').focus()")
        .unwrap();

    page.press_key("Escape").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(300));
    assert!(!button_focused(&page));
}

#[tokio::test]
#[ignore = "needs Chrome and a bundled web client"]
async fn link_closes_menu_without_focusing_button() {
    let (_server, _browser, page) = mobile_page().await;

    page.click(BUTTON).unwrap();
    page.wait_until("!document.querySelector('#mobile-menu').hidden").unwrap();

    page.click("#mobile-menu a[href='#about']").unwrap();
    page.wait_until("document.querySelector('#mobile-menu').hidden")
        .expect("link closes the menu");
    assert_eq!(page.attribute(BUTTON, "aria-expanded").unwrap().as_deref(), Some("false"));
    page.wait_until("document.activeElement.id === 'about'")
        .expect("focus follows the link");
    assert!(!button_focused(&page));
}
