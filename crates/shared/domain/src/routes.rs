//! The storefront route table.
//!
//! Keys are symbolic and stable; templates are URL path patterns where a
//! `:name` segment marks a positional parameter (e.g. `:orderId`).

/// Symbolic keys for every storefront and back-office route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Menu,
    CustomOrder,
    PizzaBuilder,
    CakeDesigner,
    Cart,
    Checkout,
    Payment,
    OrderConfirmation,
    TrackOrder,
    Subscriptions,
    Loyalty,
    About,
    Contact,
    Gallery,
    Admin,
    AdminDashboard,
    AdminOrders,
    AdminInventory,
}

impl Route {
    /// The closed route set.
    pub const ALL: [Self; 19] = [
        Self::Home,
        Self::Menu,
        Self::CustomOrder,
        Self::PizzaBuilder,
        Self::CakeDesigner,
        Self::Cart,
        Self::Checkout,
        Self::Payment,
        Self::OrderConfirmation,
        Self::TrackOrder,
        Self::Subscriptions,
        Self::Loyalty,
        Self::About,
        Self::Contact,
        Self::Gallery,
        Self::Admin,
        Self::AdminDashboard,
        Self::AdminOrders,
        Self::AdminInventory,
    ];

    /// The raw path template for this route.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Menu => "/menu",
            Self::CustomOrder => "/custom-order",
            Self::PizzaBuilder => "/custom-order/pizza",
            Self::CakeDesigner => "/custom-order/cake",
            Self::Cart => "/cart",
            Self::Checkout => "/checkout",
            Self::Payment => "/checkout/payment",
            Self::OrderConfirmation => "/order/confirmation/:orderId",
            Self::TrackOrder => "/track/:orderId",
            Self::Subscriptions => "/subscriptions",
            Self::Loyalty => "/loyalty",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Gallery => "/gallery",
            Self::Admin => "/admin",
            Self::AdminDashboard => "/admin/dashboard",
            Self::AdminOrders => "/admin/orders",
            Self::AdminInventory => "/admin/inventory",
        }
    }

    /// Names of the `:param` segments in template order.
    pub fn params(self) -> impl Iterator<Item = &'static str> {
        self.template().split('/').filter_map(|segment| segment.strip_prefix(':'))
    }

    #[must_use]
    pub fn param_count(self) -> usize {
        self.params().count()
    }

    /// Substitutes the `:param` segments with `args`, left to right.
    ///
    /// Returns `None` unless exactly one argument is supplied per parameter.
    #[must_use]
    pub fn fill(self, args: &[&str]) -> Option<String> {
        if args.len() != self.param_count() {
            return None;
        }

        let mut remaining = args.iter();
        let filled = self
            .template()
            .split('/')
            .map(|segment| {
                if segment.starts_with(':') {
                    // Arity was checked above, the iterator cannot run dry.
                    remaining.next().copied().unwrap_or_default()
                } else {
                    segment
                }
            })
            .collect::<Vec<_>>()
            .join("/");

        Some(filled)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.template())
    }
}
