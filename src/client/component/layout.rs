use dioxus::prelude::*;

use crate::client::{
    component::{Header, NotificationStack},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        NotificationStack {  }
        Outlet::<Route> {}
    })
}
