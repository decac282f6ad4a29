use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Status,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Dashboard, Page::Status];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Status => "Status",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: Page,
    pub username: String,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let links = Page::ALL.iter().map(|page| {
        let page = *page;
        let class = classes!("nav-link", (page == props.current).then_some("active"));
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(page));
        html! {
            <button type="button" {class} {onclick}>{ page.title() }</button>
        }
    });

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <nav class="nav-bar">
            <span class="nav-brand">{"Admin Console"}</span>
            <div class="nav-links">{ for links }</div>
            <div class="nav-user">
                <span class="nav-username">{ &props.username }</span>
                <button type="button" class="btn-secondary" onclick={on_logout}>{"Logout"}</button>
            </div>
        </nav>
    }
}
