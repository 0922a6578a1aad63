use cinegraph::{
    aggregate, AggregatorConfig, MovieRecord, Namespacing, PairTally, Relation, RenderOptions,
    VisNetwork,
};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Cinegraph v{}", cinegraph::version());
    println!("==========================================");
    println!();

    let movies = sample_movies();

    demo_co_star(&movies)?;
    demo_director_cast(&movies)?;
    demo_producer_movie(&movies)?;

    Ok(())
}

fn demo_co_star(movies: &[MovieRecord]) -> anyhow::Result<()> {
    println!("=== Demo 1: Co-star graph ===");
    let config = AggregatorConfig::for_relation(Relation::CoStar);
    let tally = PairTally::build(movies, &config);
    println!("  {} movies, {} actors, {} distinct pairs", tally.records_seen(), tally.entity_count(), tally.pair_total());

    // what a threshold slider sees
    for threshold in 1..=tally.max_pair_count() {
        let graph = tally.graph(threshold)?;
        println!(
            "  threshold {}: {} actors, {} edges",
            threshold,
            graph.node_count(),
            graph.edge_count()
        );
    }

    let graph = tally.graph(2)?;
    for node in graph.leads() {
        println!("  ★ {} (audience {:.2} x 10M)", node.label, node.display_weight());
    }

    let hood = graph.neighborhood(&"Song Kang-ho".into());
    let names: Vec<&str> = hood.neighbors.iter().map(|n| n.as_str()).collect();
    println!("  Song Kang-ho worked twice or more with: {}", names.join(", "));
    println!();
    Ok(())
}

fn demo_director_cast(movies: &[MovieRecord]) -> anyhow::Result<()> {
    println!("=== Demo 2: Director / lead graph ===");
    let config = AggregatorConfig::for_relation(Relation::DirectorCast)
        .with_namespacing(Namespacing::PrefixedByRole);
    let graph = aggregate(movies, &config)?;

    for edge in graph.edges() {
        println!("  {} -> {} ({} movies)", edge.a, edge.b, edge.weight);
    }

    let mut network = VisNetwork::from_graph(&graph, &RenderOptions::default());
    if network.highlight(&graph, "Bong Joon-ho") {
        println!("  Highlighted Bong Joon-ho's collaborators");
    }
    println!();
    Ok(())
}

fn demo_producer_movie(movies: &[MovieRecord]) -> anyhow::Result<()> {
    println!("=== Demo 3: Production company graph ===");
    let config = AggregatorConfig::for_relation(Relation::ProducerMovie);
    let graph = aggregate(movies, &config)?;
    let stats = graph.statistics();
    println!("  {} companies and movies, {} links", stats.node_count, stats.edge_count);

    let network = VisNetwork::from_graph(&graph, &RenderOptions::default());
    println!("  vis-network payload: {} bytes", network.to_json()?.len());
    println!();
    println!("✅ Done");
    Ok(())
}

fn sample_movies() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new("Memories of Murder", 5_255_376)
            .with_director("Bong Joon-ho")
            .with_main_cast(["Song Kang-ho", "Kim Sang-kyung"])
            .with_supporting_cast(["Park Hae-il", "Byun Hee-bong"])
            .with_producers(["Sidus"]),
        MovieRecord::new("The Host", 13_019_740)
            .with_director("Bong Joon-ho")
            .with_main_cast(["Song Kang-ho", "Byun Hee-bong", "Park Hae-il", "Bae Doona"])
            .with_producers(["Chungeorahm"]),
        MovieRecord::new("Snowpiercer", 9_350_451)
            .with_director("Bong Joon-ho")
            .with_main_cast(["Song Kang-ho", "Chris Evans"])
            .with_supporting_cast(["Go Ah-sung"])
            .with_producers(["Moho Film", "Opus Pictures"]),
        MovieRecord::new("Parasite", 10_313_735)
            .with_director("Bong Joon-ho")
            .with_main_cast(["Song Kang-ho", "Lee Sun-kyun", "Cho Yeo-jeong"])
            .with_supporting_cast(["Choi Woo-shik", "Park So-dam"])
            .with_producers(["Barunson E&A"]),
        MovieRecord::new("The Attorney", 11_375_954)
            .with_director("Yang Woo-suk")
            .with_main_cast(["Song Kang-ho"])
            .with_supporting_cast(["Kim Young-ae", "Oh Dal-su", "Kwak Do-won"])
            .with_producers(["Withus Film"]),
        MovieRecord::new("A Taxi Driver", 12_186_327)
            .with_director("Jang Hoon")
            .with_main_cast(["Song Kang-ho", "Thomas Kretschmann"])
            .with_supporting_cast(["Yoo Hae-jin", "Ryu Jun-yeol"])
            .with_producers(["The Lamp"]),
    ]
}
