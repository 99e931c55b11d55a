#[cfg(test)]
mod binance_spot_test {
    use strum::IntoEnumIterator;
    use venue_normalizer::binance::spot::BinanceSpotOrderType;
    use venue_normalizer::core::ToUnifiedOrderType;
    use venue_normalizer::model::OrderType;

    #[test]
    pub fn normalize_spot_order_types() {
        assert_eq!(
            BinanceSpotOrderType::MARKET.to_order_type(),
            OrderType::Market
        );
        assert_eq!(
            BinanceSpotOrderType::LIMIT.to_order_type(),
            OrderType::Limit
        );
        assert_eq!(
            BinanceSpotOrderType::STOP.to_order_type(),
            OrderType::StopMarket
        );
        assert_eq!(
            BinanceSpotOrderType::STOP_LOSS.to_order_type(),
            OrderType::StopMarket
        );
        assert_eq!(
            BinanceSpotOrderType::STOP_LOSS_LIMIT.to_order_type(),
            OrderType::StopLimit
        );
        assert_eq!(
            BinanceSpotOrderType::TAKE_PROFIT.to_order_type(),
            OrderType::Limit
        );
        assert_eq!(
            BinanceSpotOrderType::TAKE_PROFIT_LIMIT.to_order_type(),
            OrderType::StopLimit
        );
        assert_eq!(
            BinanceSpotOrderType::LIMIT_MAKER.to_order_type(),
            OrderType::Limit
        );
    }

    #[test]
    pub fn stop_and_stop_loss_collapse() {
        assert_eq!(
            BinanceSpotOrderType::STOP.to_order_type(),
            BinanceSpotOrderType::STOP_LOSS.to_order_type()
        );
    }

    #[test]
    pub fn take_profit_variants_stay_distinct() {
        assert_ne!(
            BinanceSpotOrderType::TAKE_PROFIT.to_order_type(),
            BinanceSpotOrderType::TAKE_PROFIT_LIMIT.to_order_type()
        );
    }

    #[test]
    pub fn every_spot_token_has_an_image() {
        let images: Vec<OrderType> = BinanceSpotOrderType::iter()
            .map(|venue_type| venue_type.to_order_type())
            .collect();
        assert_eq!(images.len(), 8);
    }

    #[test]
    pub fn wire_tokens_round_trip() {
        let json = serde_json::to_string(&BinanceSpotOrderType::TAKE_PROFIT_LIMIT).unwrap();
        assert_eq!(json, "\"TAKE_PROFIT_LIMIT\"");
        let parsed = serde_json::from_str::<BinanceSpotOrderType>("\"STOP_LOSS\"").unwrap();
        assert!(matches!(parsed, BinanceSpotOrderType::STOP_LOSS));
    }
}
