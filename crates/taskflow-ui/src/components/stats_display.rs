use taskflow_shared::view::TaskStats;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatsDisplayProps {
  pub stats: TaskStats
}

#[function_component(StatsDisplay)]
pub fn stats_display(
  props: &StatsDisplayProps
) -> Html {
  html! {
      <div class="stats">
          <span class="stat">
              <span class="dot active"></span>
              <span data-testid="text-active-count">
                  { format!("{} Active", props.stats.active) }
              </span>
          </span>
          <span class="stat">
              <span class="dot done"></span>
              <span data-testid="text-done-count">
                  { format!("{} Done", props.stats.completed) }
              </span>
          </span>
      </div>
  }
}
