use contracts::domain::a001_service_entry::aggregate::PaymentReceivedBy;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || badge_variant_class(variant.get().as_deref());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn badge_variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Badge showing who collected the payment
#[component]
pub fn PaymentBadge(payment: PaymentReceivedBy) -> impl IntoView {
    let variant = match payment {
        PaymentReceivedBy::Hotel => "primary",
        PaymentReceivedBy::Nirvaana => "success",
    };

    view! {
        <Badge variant=variant.to_string()>{payment.display_name()}</Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_class() {
        assert_eq!(badge_variant_class(Some("success")), "badge--success");
        assert_eq!(badge_variant_class(Some("unknown")), "badge--neutral");
        assert_eq!(badge_variant_class(None), "badge--neutral");
    }
}
