/*!

# Quick start with Google Forms

This example goes from a published form to a JSON file that a report page can load.

**Collecting the answers** Create the survey in Google Forms as usual. Each question becomes one column of the export, and
the title of the question is the label used everywhere afterwards, so keep the titles unique. After the survey is closed,
open the `Responses` tab and use the `Download responses (.csv)` option.

The export looks like this:

```text
Timestamp,Favorite color
2020-01-01,Red
2020-01-02,Blue
2020-01-03,Red
2020-01-04,
```

**Converting** Run `surveyjson` on the downloaded file:

```bash
surveyjson 'responses.csv'
```

The program reads the file, logs the number of records loaded, and writes `responses.csv.json` next to the input:

```text
[2020-01-05T10:12:01Z INFO  surveyjson::convert] Reading survey responses from "/home/me/responses.csv"
[2020-01-05T10:12:01Z INFO  surveyjson::convert::io_csv] 4 records loaded
[2020-01-05T10:12:01Z INFO  surveyjson::convert::io_csv] 4 records loaded
Writing json output to /home/me/responses.csv.json
```

The JSON file contains the header row (`qIndex`), the answers grouped by question (`byQuestion`) and the answers grouped by
respondent (`byResponse`):

```json
{
  "qIndex": ["Timestamp", "Favorite color"],
  "byQuestion": {
    "Timestamp": ["2020-01-01", "2020-01-02", "2020-01-03", "2020-01-04"],
    "Favorite color": ["Red", "Blue", "Red", ""]
  },
  "byResponse": [
    ["2020-01-01", "Red"],
    ["2020-01-02", "Blue"],
    ["2020-01-03", "Red"],
    ["2020-01-04", ""]
  ]
}
```

**Summaries** Pass `--summary` to also print the tally of every question (the `Timestamp` entry is left out below):

```bash
surveyjson --summary 'responses.csv'
```

```json
[
  {
    "question": "Favorite color",
    "kind": "enumerable",
    "summary": [
      { "a": "Red", "n": 2 },
      { "a": "Blue", "n": 1 },
      { "a": "N/A", "n": 1 }
    ]
  }
]
```

Blank answers are counted as `N/A`. A question with more than 7 distinct answers is reported as `freeform`, which is the
hint for a report page to show the answers as free text instead of a chart.

**Other options**

- `--out <file>` writes the JSON somewhere else, `--out stdout` prints it instead (a `--summary` then goes to the
  standard error).
- `--reference <file>` compares the output with a previously generated file and prints the differences.
- `--verbose` turns on debug logging. The `RUST_LOG` variable is also honored.

*/
