use yew::{
  Html,
  function_component,
  html
};

#[function_component(EmptyState)]
pub fn empty_state() -> Html {
  html! {
      <div class="card">
          <div class="empty-state">
              <div class="empty-icon">{ "☰" }</div>
              <h3 data-testid="text-empty-title">{ "No tasks yet" }</h3>
              <p data-testid="text-empty-description">
                  { "Add your first task above to get started. Stay organized and boost your productivity!" }
              </p>
          </div>
      </div>
  }
}
