use storefront::StorefrontError;

fn main() -> Result<(), StorefrontError> {
    storefront::run()
}
