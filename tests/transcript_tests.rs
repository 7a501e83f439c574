//! Golden transcript tests.
//!
//! The transcript wording is the engine's external interface: these
//! scenarios pin the exact line sequences a driver observes.

use trivia_engine::{Category, Game, PlayerId};

fn lines(game: &Game) -> Vec<String> {
    game.transcript().lines().map(str::to_string).collect()
}

/// Single player: wrap-around movement, penalty box entry, a failed
/// release roll, then a successful one.
#[test]
fn test_single_player_penalty_box_round_trip() {
    let mut game = Game::new();
    game.add_player("Bart").unwrap();

    game.roll(12).unwrap();
    game.answer_incorrect().unwrap();
    game.roll(2).unwrap();
    game.roll(13).unwrap();
    game.answer_correct().unwrap();
    game.roll(13).unwrap();

    let expected = [
        "Bart was added",
        "They are player number 1",
        // Roll 12 wraps back to the start square.
        "Bart is the current player",
        "They have rolled a 12",
        "Bart's new location is 0",
        "The category is Pop",
        "Pop Question 0",
        "Question was incorrectly answered",
        "Bart was sent to the penalty box",
        // Even roll while boxed: no movement, no question.
        "Bart is the current player",
        "They have rolled a 2",
        "Bart is not getting out of the penalty box",
        // Odd roll while boxed: move and ask.
        "Bart is the current player",
        "They have rolled a 13",
        "Bart is getting out of the penalty box",
        "Bart's new location is 1",
        "The category is Science",
        "Science Question 0",
        // The qualifying roll makes the correct answer score.
        "Answer was correct!!!!",
        "Bart now has 1 Gold Coins.",
        "Bart is the current player",
        "They have rolled a 13",
        "Bart is getting out of the penalty box",
        "Bart's new location is 2",
        "The category is Sports",
        "Sports Question 0",
    ];
    assert_eq!(lines(&game), expected);
}

/// Two players answering everything correctly: alternating seats,
/// category walk around the board, FIFO question draws.
#[test]
fn test_two_players_all_correct() {
    let mut game = Game::new();
    game.add_player("Bart").unwrap();
    game.add_player("Lisa").unwrap();

    game.roll(1).unwrap();
    assert!(game.answer_correct().unwrap());
    for _ in 0..9 {
        game.roll(2).unwrap();
        assert!(game.answer_correct().unwrap());
    }

    let expected = [
        "Bart was added",
        "They are player number 1",
        "Lisa was added",
        "They are player number 2",
        "Bart is the current player",
        "They have rolled a 1",
        "Bart's new location is 1",
        "The category is Science",
        "Science Question 0",
        "Answer was correct!!!!",
        "Bart now has 1 Gold Coins.",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 2",
        "The category is Sports",
        "Sports Question 0",
        "Answer was correct!!!!",
        "Lisa now has 1 Gold Coins.",
        "Bart is the current player",
        "They have rolled a 2",
        "Bart's new location is 3",
        "The category is Rock",
        "Rock Question 0",
        "Answer was correct!!!!",
        "Bart now has 2 Gold Coins.",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 4",
        "The category is Pop",
        "Pop Question 0",
        "Answer was correct!!!!",
        "Lisa now has 2 Gold Coins.",
        "Bart is the current player",
        "They have rolled a 2",
        "Bart's new location is 5",
        "The category is Science",
        "Science Question 1",
        "Answer was correct!!!!",
        "Bart now has 3 Gold Coins.",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 6",
        "The category is Sports",
        "Sports Question 1",
        "Answer was correct!!!!",
        "Lisa now has 3 Gold Coins.",
        "Bart is the current player",
        "They have rolled a 2",
        "Bart's new location is 7",
        "The category is Rock",
        "Rock Question 1",
        "Answer was correct!!!!",
        "Bart now has 4 Gold Coins.",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 8",
        "The category is Pop",
        "Pop Question 1",
        "Answer was correct!!!!",
        "Lisa now has 4 Gold Coins.",
        "Bart is the current player",
        "They have rolled a 2",
        "Bart's new location is 9",
        "The category is Science",
        "Science Question 2",
        "Answer was correct!!!!",
        "Bart now has 5 Gold Coins.",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 10",
        "The category is Sports",
        "Sports Question 2",
        "Answer was correct!!!!",
        "Lisa now has 5 Gold Coins.",
    ];
    assert_eq!(lines(&game), expected);
}

/// Continuing the all-correct game ends it: the eleventh outcome call
/// is Bart's sixth coin and reports the game over.
#[test]
fn test_all_correct_game_terminates_on_sixth_coin() {
    let mut game = Game::new();
    let bart = game.add_player("Bart").unwrap();
    game.add_player("Lisa").unwrap();

    game.roll(1).unwrap();
    assert!(game.answer_correct().unwrap());
    for _ in 0..9 {
        game.roll(2).unwrap();
        assert!(game.answer_correct().unwrap());
    }

    game.roll(2).unwrap();
    assert!(!game.answer_correct().unwrap());

    assert_eq!(game.winner(), Some(bart));
    assert_eq!(game.seat(bart).unwrap().purse, 6);
    let all = lines(&game);
    assert_eq!(all.last().unwrap(), "Bart now has 6 Gold Coins.");
    assert_eq!(all[all.len() - 4], "The category is Rock");
}

/// A boxed player with only even rolls never moves, never gets asked,
/// and never scores, while the free player keeps collecting.
#[test]
fn test_boxed_player_skips_awards() {
    let mut game = Game::new();
    let bart = game.add_player("Bart").unwrap();
    let lisa = game.add_player("Lisa").unwrap();

    game.roll(1).unwrap();
    assert!(game.answer_incorrect().unwrap());
    for _ in 0..9 {
        game.roll(2).unwrap();
        assert!(game.answer_correct().unwrap());
    }

    let expected = [
        "Bart was added",
        "They are player number 1",
        "Lisa was added",
        "They are player number 2",
        "Bart is the current player",
        "They have rolled a 1",
        "Bart's new location is 1",
        "The category is Science",
        "Science Question 0",
        "Question was incorrectly answered",
        "Bart was sent to the penalty box",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 2",
        "The category is Sports",
        "Sports Question 0",
        "Answer was correct!!!!",
        "Lisa now has 1 Gold Coins.",
        "Bart is the current player",
        "They have rolled a 2",
        "Bart is not getting out of the penalty box",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 4",
        "The category is Pop",
        "Pop Question 0",
        "Answer was correct!!!!",
        "Lisa now has 2 Gold Coins.",
        "Bart is the current player",
        "They have rolled a 2",
        "Bart is not getting out of the penalty box",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 6",
        "The category is Sports",
        "Sports Question 1",
        "Answer was correct!!!!",
        "Lisa now has 3 Gold Coins.",
        "Bart is the current player",
        "They have rolled a 2",
        "Bart is not getting out of the penalty box",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 8",
        "The category is Pop",
        "Pop Question 1",
        "Answer was correct!!!!",
        "Lisa now has 4 Gold Coins.",
        "Bart is the current player",
        "They have rolled a 2",
        "Bart is not getting out of the penalty box",
        "Lisa is the current player",
        "They have rolled a 2",
        "Lisa's new location is 10",
        "The category is Sports",
        "Sports Question 2",
        "Answer was correct!!!!",
        "Lisa now has 5 Gold Coins.",
    ];
    assert_eq!(lines(&game), expected);

    assert_eq!(game.seat(bart).unwrap().purse, 0);
    assert_eq!(game.seat(lisa).unwrap().purse, 5);
    assert_eq!(game.current_player().unwrap(), PlayerId::new(0));
    assert_eq!(game.remaining_questions(Category::Science), 49);
}
