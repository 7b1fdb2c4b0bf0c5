use crate::data::OrderReward;

/// Human-readable summary of the cart, one `<count> x <title>` line per
/// reward in the cart.
pub fn order_summary(orders: &[OrderReward]) -> String {
    orders
        .iter()
        .filter(|order| order.in_cart())
        .map(|order| format!("{} x {}", order.count, order.reward.title))
        .collect::<Vec<_>>()
        .join("\n")
}
