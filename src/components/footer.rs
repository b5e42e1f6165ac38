use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-columns">
                <div>
                    <h4>"Product"</h4>
                    <p>"Bot setup"</p>
                    <p>"Assistant"</p>
                </div>
                <div>
                    <h4>"Company"</h4>
                    <p>"About"</p>
                    <p>"Contact"</p>
                </div>
                <div>
                    <h4>"Legal"</h4>
                    <p>"Terms"</p>
                    <p>"Privacy"</p>
                </div>
            </div>
            <p class="footer-note">
                "Trading involves risk. Bots execute the rules you configure and do not guarantee returns."
            </p>
        </footer>
    }
}
