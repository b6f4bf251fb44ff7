//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__col">
                <h4>"Granite Peak Construction"</h4>
                <p>"Building the spaces communities rely on since 1998."</p>
            </div>
            <div class="footer__col">
                <h4>"Visit"</h4>
                <p>"14 Quarry Road, Matlock, Derbyshire"</p>
                <p>"Mon-Fri 8:00-17:30"</p>
            </div>
            <div class="footer__col">
                <h4>"Talk to us"</h4>
                <p>"01629 555 014"</p>
                <a href="/contact">"Request a quote"</a>
            </div>
        </footer>
    }
}
