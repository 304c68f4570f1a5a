mod test_offer_to_unknown_target_dropped;
